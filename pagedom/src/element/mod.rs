mod content;
mod node;

pub use content::Content;
pub use node::{Display, Element};

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

/// Find an element by ID in the tree, mutably.
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
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if let Content::Children(children) = &root.content {
        if children.iter().any(|c| c.id == id) {
            return Some(root);
        }
        for child in children {
            if let Some(found) = find_parent(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs of the ancestors of `id`, nearest first. Empty if `id` is the root or absent.
pub fn ancestors(root: &Element, id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if path_to(root, id, &mut path) {
        path.pop();
        path.reverse();
    } else {
        path.clear();
    }
    path
}

fn path_to(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if path_to(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Walk the tree in document order, calling `f` on every element.
pub fn walk<'a>(root: &'a Element, f: &mut impl FnMut(&'a Element)) {
    f(root);
    for child in root.child_elements() {
        walk(child, f);
    }
}
