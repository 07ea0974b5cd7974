mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Mutable variant of [`find_element`].
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Ids from `root` down to the element with `id`, both inclusive.
/// Returns None if the element is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }

    None
}

/// Child positions leading from `root` to the first element (in document
/// order) accepted by `predicate`. The root itself is the empty position.
///
/// Unlike ids, positions cannot collide, so they address exactly one node
/// for as long as the tree shape is unchanged.
pub fn position_where(root: &Element, predicate: &impl Fn(&Element) -> bool) -> Option<Vec<usize>> {
    if predicate(root) {
        return Some(Vec::new());
    }

    for (index, child) in root.child_elements().iter().enumerate() {
        if let Some(mut position) = position_where(child, predicate) {
            position.insert(0, index);
            return Some(position);
        }
    }

    None
}

pub fn element_at<'a>(root: &'a Element, position: &[usize]) -> Option<&'a Element> {
    position
        .iter()
        .try_fold(root, |element, &index| element.child_elements().get(index))
}

pub fn element_at_mut<'a>(root: &'a mut Element, position: &[usize]) -> Option<&'a mut Element> {
    let mut element = root;
    for &index in position {
        element = match &mut element.content {
            Content::Children(children) => children.get_mut(index)?,
            _ => return None,
        };
    }
    Some(element)
}
