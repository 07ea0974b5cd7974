//! The page document: a root `body` element plus event listeners.
//!
//! Listeners are keyed per element and event kind. Registering a listener
//! under a key that is already bound on the same element replaces it, so a
//! component can re-run its wiring step without stacking handlers.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::element::{
    element_at, element_at_mut, find_element, find_element_mut, path_to, Content, Element,
};
use crate::error::DomError;
use crate::event::{Event, EventKind};
use crate::query::{
    closest, query_selector, query_selector_all, query_selector_position, Selector,
};

/// Event callback. Receives the document so handlers can mutate the page.
pub type Listener = Rc<dyn Fn(&mut Document, &Event)>;

struct Binding {
    key: String,
    listener: Listener,
}

pub struct Document {
    root: Element,
    listeners: HashMap<(String, EventKind), Vec<Binding>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    /// Wrap `children` in a `body` element with id `"body"`.
    pub fn new(children: impl IntoIterator<Item = Element>) -> Self {
        Self::from_root(Element::new("body").id("body").children(children))
    }

    pub fn from_root(root: Element) -> Self {
        Self {
            root,
            listeners: HashMap::new(),
        }
    }

    pub fn body(&self) -> &Element {
        &self.root
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Element at a child-position path from the body.
    pub fn get_at(&self, position: &[usize]) -> Option<&Element> {
        element_at(&self.root, position)
    }

    pub fn get_at_mut(&mut self, position: &[usize]) -> Option<&mut Element> {
        element_at_mut(&mut self.root, position)
    }

    pub fn query_selector_position(&self, selector: &Selector) -> Option<Vec<usize>> {
        query_selector_position(&self.root, selector)
    }

    pub fn query_selector(&self, selector: &Selector) -> Option<&Element> {
        query_selector(&self.root, selector)
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<&Element> {
        query_selector_all(&self.root, selector)
    }

    pub fn closest(&self, id: &str, selector: &Selector) -> Option<&Element> {
        closest(&self.root, id, selector)
    }

    /// Append `child` to the element with `parent_id`.
    pub fn append_child(&mut self, parent_id: &str, child: Element) -> Result<(), DomError> {
        let parent = self
            .get_mut(parent_id)
            .ok_or_else(|| DomError::ElementNotFound(parent_id.to_string()))?;

        match &mut parent.content {
            Content::Children(children) => children.push(child),
            Content::None => parent.content = Content::Children(vec![child]),
            Content::Text(_) => return Err(DomError::NotAContainer(parent_id.to_string())),
        }
        Ok(())
    }

    /// Register `listener` for `kind` events reaching the element `id`.
    ///
    /// Returns true if an existing listener bound under `key` was replaced.
    pub fn add_event_listener(
        &mut self,
        id: &str,
        kind: EventKind,
        key: impl Into<String>,
        listener: Listener,
    ) -> Result<bool, DomError> {
        if self.get(id).is_none() {
            return Err(DomError::ElementNotFound(id.to_string()));
        }

        let key = key.into();
        let bindings = self.listeners.entry((id.to_string(), kind)).or_default();
        if let Some(existing) = bindings.iter_mut().find(|b| b.key == key) {
            log::trace!("[dom] replacing {kind:?} listener '{key}' on {id}");
            existing.listener = listener;
            return Ok(true);
        }

        log::trace!("[dom] adding {kind:?} listener '{key}' on {id}");
        bindings.push(Binding { key, listener });
        Ok(false)
    }

    /// Returns true if a listener bound under `key` was removed.
    pub fn remove_event_listener(&mut self, id: &str, kind: EventKind, key: &str) -> bool {
        let Some(bindings) = self.listeners.get_mut(&(id.to_string(), kind)) else {
            return false;
        };
        let before = bindings.len();
        bindings.retain(|b| b.key != key);
        bindings.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Dispatch `event` to its target and then to each ancestor (bubbling).
    ///
    /// Every listener on the path runs to completion before the next one
    /// starts. Returns the number of listeners invoked.
    pub fn dispatch(&mut self, event: Event) -> Result<usize, DomError> {
        let target = event.target();
        let path = path_to(&self.root, target)
            .ok_or_else(|| DomError::ElementNotFound(target.to_string()))?;

        let kind = event.kind();
        let queued: Vec<Listener> = path
            .iter()
            .rev()
            .filter_map(|id| self.listeners.get(&(id.clone(), kind)))
            .flat_map(|bindings| bindings.iter().map(|b| Rc::clone(&b.listener)))
            .collect();

        let count = queued.len();
        log::debug!("[dom] dispatching {event:?} to {count} listener(s)");
        for listener in queued {
            listener(self, &event);
        }
        Ok(count)
    }

    pub fn click(&mut self, id: &str) -> Result<usize, DomError> {
        self.dispatch(Event::click(id))
    }

    pub fn submit(&mut self, id: &str) -> Result<usize, DomError> {
        self.dispatch(Event::submit(id))
    }
}
