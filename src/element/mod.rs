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

/// Find an element by ID, returning a mutable borrow.
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

/// Find the parent of the element with the given ID.
///
/// Returns `None` when `id` is the root or not in the tree.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if let Content::Children(children) = &root.content {
        for child in children {
            if child.id == id {
                return Some(root);
            }
            if let Some(found) = find_parent(child, id) {
                return Some(found);
            }
        }
    }

    None
}
