use crate::element::Element;

/// Rows between the top of `container`'s content and the start of the child
/// subtree containing `id`, plus that child's height.
///
/// Children of a scroll container stack vertically, each `height` rows tall.
pub fn child_extent(container: &Element, id: &str) -> Option<(u16, u16)> {
    let mut top: u16 = 0;
    for child in container.child_elements() {
        if child.is_hidden() {
            continue;
        }
        if contains(child, id) {
            return Some((top, child.height));
        }
        top = top.saturating_add(child.height);
    }
    None
}

fn contains(element: &Element, id: &str) -> bool {
    element.id == id || element.child_elements().iter().any(|c| contains(c, id))
}

/// Total content height of a scroll container.
pub fn content_height(container: &Element) -> u16 {
    container
        .child_elements()
        .iter()
        .filter(|c| !c.is_hidden())
        .fold(0u16, |acc, c| acc.saturating_add(c.height))
}

/// Scroll offset that brings `[top, top + height)` into a viewport of `viewport`
/// rows, moving by the least amount (nearest edge).
pub fn nearest_offset(current: u16, viewport: u16, top: u16, height: u16) -> u16 {
    let bottom = top.saturating_add(height);
    if top < current {
        top
    } else if bottom > current.saturating_add(viewport) {
        // Taller-than-viewport items align to their top edge.
        bottom.saturating_sub(viewport).min(top)
    } else {
        current
    }
}
