//! Attribute selectors over an element tree.
//!
//! Only the selector shapes the page components need are supported:
//! `[attr]`, `[attr="value"]` and `[attr].class`. Matching walks the tree
//! in document order (pre-order, parent before children).

use std::fmt;

use crate::element::{path_to, position_where, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `[name]`
    Attr(String),
    /// `[name="value"]`
    AttrEq(String, String),
    /// `[name].class`
    AttrWithClass(String, String),
}

impl Selector {
    pub fn attr(name: impl Into<String>) -> Self {
        Selector::Attr(name.into())
    }

    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Selector::AttrEq(name.into(), value.into())
    }

    pub fn attr_with_class(name: impl Into<String>, class: impl Into<String>) -> Self {
        Selector::AttrWithClass(name.into(), class.into())
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Attr(name) => element.has_attr(name),
            Selector::AttrEq(name, value) => element.get_attr(name) == Some(value.as_str()),
            Selector::AttrWithClass(name, class) => {
                element.has_attr(name) && element.has_class(class)
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Attr(name) => write!(f, "[{name}]"),
            Selector::AttrEq(name, value) => write!(f, "[{name}=\"{value}\"]"),
            Selector::AttrWithClass(name, class) => write!(f, "[{name}].{class}"),
        }
    }
}

/// First matching element in document order.
pub fn query_selector<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    if selector.matches(root) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| query_selector(child, selector))
}

/// Child positions of the first matching element; see
/// [`position_where`](crate::element::position_where).
pub fn query_selector_position(root: &Element, selector: &Selector) -> Option<Vec<usize>> {
    position_where(root, &|element: &Element| selector.matches(element))
}

/// All matching elements in document order.
pub fn query_selector_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, selector, &mut found);
    found
}

fn collect<'a>(element: &'a Element, selector: &Selector, found: &mut Vec<&'a Element>) {
    if selector.matches(element) {
        found.push(element);
    }
    for child in element.child_elements() {
        collect(child, selector, found);
    }
}

/// Nearest element matching `selector`, starting at the element with `id`
/// itself and walking up through its ancestors.
pub fn closest<'a>(root: &'a Element, id: &str, selector: &Selector) -> Option<&'a Element> {
    let path = path_to(root, id)?;

    let mut current = root;
    let mut chain = vec![root];
    for step in path.iter().skip(1) {
        current = current.child_elements().iter().find(|c| &c.id == step)?;
        chain.push(current);
    }

    chain.into_iter().rev().find(|el| selector.matches(el))
}
