//! Wiring drawers into a [`Document`].

use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{Document, Event, EventKind, Listener, Selector};

use crate::controller::{DrawerController, Transition};
use crate::error::DrawerError;

/// A controller shared between page listeners and direct callers.
pub type SharedController = Rc<RefCell<DrawerController>>;

/// Listener key used for trigger clicks. Re-binding replaces, never stacks.
pub const TRIGGER_LISTENER_KEY: &str = "drawer-trigger";

const SUBMIT_LISTENER_KEY: &str = "drawer-close-on-submit";

/// Bind every trigger element currently in `document` to `controller`.
///
/// The trigger's attribute is read when it is clicked, not now, so editing
/// it later retargets the trigger. Triggers added to the page afterwards are
/// picked up by calling `init` again; triggers bound earlier keep exactly one
/// listener. Returns the number of triggers bound.
pub fn init(controller: &SharedController, document: &mut Document) -> usize {
    let attribute = controller.borrow().config().trigger_attribute.clone();
    let triggers: Vec<String> = document
        .query_selector_all(&Selector::attr(attribute.as_str()))
        .into_iter()
        .map(|el| el.id.clone())
        .collect();

    for id in &triggers {
        let listener = trigger_listener(controller, id.clone(), attribute.clone());
        match document.add_event_listener(id, EventKind::Click, TRIGGER_LISTENER_KEY, listener) {
            Ok(true) => log::trace!("[drawer] rebound trigger {id}"),
            Ok(false) => log::trace!("[drawer] bound trigger {id}"),
            Err(e) => log::warn!("[drawer] could not bind trigger {id}: {e}"),
        }
    }

    log::debug!("[drawer] init bound {} trigger(s)", triggers.len());
    triggers.len()
}

fn trigger_listener(controller: &SharedController, trigger_id: String, attribute: String) -> Listener {
    let controller = Rc::clone(controller);
    Rc::new(move |document: &mut Document, _event: &Event| {
        let name = document
            .get(&trigger_id)
            .and_then(|el| el.get_attr(&attribute))
            .map(str::to_string);
        let Some(name) = name else {
            log::warn!("[drawer] trigger {trigger_id} no longer carries {attribute}");
            return;
        };
        let mut controller = controller.borrow_mut();
        if controller.config().close_others_on_trigger {
            controller.close_others(document, &name);
        }
        // Failures were logged by the controller.
        let _ = controller.toggle(document, &name);
    })
}

/// Close the drawer that contains `element_id`.
///
/// This is how a collaborator inside a drawer (a form that finished its
/// work, say) dismisses it without knowing the drawer's name.
pub fn close_enclosing(
    controller: &mut DrawerController,
    document: &mut Document,
    element_id: &str,
) -> Result<Transition, DrawerError> {
    let attribute = controller.config().drawer_attribute.clone();
    let name = document
        .closest(element_id, &Selector::attr(attribute.as_str()))
        .and_then(|drawer| drawer.get_attr(&attribute))
        .map(str::to_string);

    match name {
        Some(name) => controller.close(document, &name),
        None => {
            let err = DrawerError::NoEnclosingDrawer(element_id.to_string());
            log::error!("[drawer] {err}");
            Err(err)
        }
    }
}

/// Close the enclosing drawer whenever the form `form_id` is submitted.
pub fn close_on_submit(
    controller: &SharedController,
    document: &mut Document,
    form_id: &str,
) -> Result<(), pagedom::DomError> {
    let controller = Rc::clone(controller);
    let form = form_id.to_string();
    let listener: Listener = Rc::new(move |document: &mut Document, _event: &Event| {
        let _ = close_enclosing(&mut controller.borrow_mut(), document, &form);
    });
    document.add_event_listener(form_id, EventKind::Submit, SUBMIT_LISTENER_KEY, listener)?;
    Ok(())
}
