use crate::element::Element;
use crate::event::Event;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus to `id`.
    /// Returns the Blur/Focus events produced, empty if focus did not change.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur { target: old });
        }
        self.focused = Some(id.to_string());
        events.push(Event::Focus {
            target: id.to_string(),
        });
        events
    }

    /// Clear focus.
    /// Returns the Blur event if something was focused.
    pub fn blur(&mut self) -> Option<Event> {
        self.focused.take().map(|target| Event::Blur { target })
    }

    /// Focus the next focusable element (Tab navigation).
    pub fn focus_next(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.focus(&new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.focus(&new_focus)
    }
}

/// Collect focusable element IDs in tab order, skipping hidden subtrees.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.is_hidden() {
        return;
    }
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
