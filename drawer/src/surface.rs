//! The capability a page must provide for drawers to be driven on it.

use pagedom::{Document, Selector};

/// Lookup and marker mutation for drawers.
///
/// The controller never touches page internals directly; everything goes
/// through this trait, so the same state machine runs against a
/// [`Document`] or a plain in-memory map in tests.
pub trait DrawerSurface {
    /// Opaque reference to one drawer on the page.
    type Handle;

    /// First drawer whose `attribute` equals `name`.
    fn find_by_name(&self, attribute: &str, name: &str) -> Option<Self::Handle>;

    fn set_open(&mut self, handle: &Self::Handle, marker: &str, open: bool);

    fn is_open(&self, handle: &Self::Handle, marker: &str) -> bool;

    /// Names of all drawers currently carrying `marker`, in page order.
    fn open_names(&self, attribute: &str, marker: &str) -> Vec<String>;

    fn set_scroll_locked(&mut self, locked: bool);
}

/// Drawers are addressed by their child position from the body, not by
/// element id: ids are not guaranteed unique, positions are.
impl DrawerSurface for Document {
    type Handle = Vec<usize>;

    fn find_by_name(&self, attribute: &str, name: &str) -> Option<Vec<usize>> {
        self.query_selector_position(&Selector::attr_eq(attribute, name))
    }

    fn set_open(&mut self, handle: &Vec<usize>, marker: &str, open: bool) {
        let Some(element) = self.get_at_mut(handle) else {
            log::warn!("[drawer] element at {handle:?} vanished before marker update");
            return;
        };
        if open {
            element.add_class(marker);
        } else {
            element.remove_class(marker);
        }
    }

    fn is_open(&self, handle: &Vec<usize>, marker: &str) -> bool {
        self.get_at(handle).is_some_and(|el| el.has_class(marker))
    }

    fn open_names(&self, attribute: &str, marker: &str) -> Vec<String> {
        self.query_selector_all(&Selector::attr_with_class(attribute, marker))
            .into_iter()
            .filter_map(|el| el.get_attr(attribute).map(str::to_string))
            .collect()
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let overflow = if locked { "hidden" } else { "auto" };
        self.body_mut().set_style("overflow", overflow);
    }
}
