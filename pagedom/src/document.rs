//! The document: an element tree plus focus and timer state.

use crate::element::{self, Content, Display, Element};
use crate::error::DomError;
use crate::event::Event;
use crate::focus::FocusState;
use crate::scroll;
use crate::timer::Timers;

#[derive(Debug, Default)]
pub struct Document {
    root: Element,
    focus: FocusState,
    timers: Timers,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
            timers: Timers::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn get(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn require(&self, id: &str) -> Result<&Element, DomError> {
        self.get(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
    }

    pub fn require_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.get_mut(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
    }

    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        element::find_parent(&self.root, id)
    }

    /// Ancestor IDs of `id`, nearest first.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        element::ancestors(&self.root, id)
    }

    /// True if `id` is `ancestor` or lies inside it.
    pub fn is_within(&self, id: &str, ancestor: &str) -> bool {
        id == ancestor || self.ancestors(id).iter().any(|a| a == ancestor)
    }

    /// IDs of all elements with the given tag, in document order.
    pub fn query_by_tag(&self, tag: &str) -> Vec<String> {
        self.query_all(|el| el.tag == tag)
    }

    /// IDs of all elements matching `predicate`, in document order.
    pub fn query_all(&self, mut predicate: impl FnMut(&Element) -> bool) -> Vec<String> {
        let mut result = Vec::new();
        element::walk(&self.root, &mut |el| {
            if predicate(el) {
                result.push(el.id.clone());
            }
        });
        result
    }

    /// First element inside `scope` whose `data-{key}` equals `value`.
    pub fn query_data(&self, scope: &str, key: &str, value: &str) -> Option<String> {
        let scope = self.get(scope)?;
        let mut found = None;
        element::walk(scope, &mut |el| {
            if found.is_none() && el.id != scope.id && el.get_data(key) == Some(value) {
                found = Some(el.id.clone());
            }
        });
        found
    }

    // -------------------------------------------------------------------------
    // Tree mutation
    // -------------------------------------------------------------------------

    pub fn append_child(&mut self, parent: &str, child: Element) -> Result<(), DomError> {
        let parent_el = self.require_mut(parent)?;
        match &mut parent_el.content {
            Content::Children(children) => children.push(child),
            Content::None => parent_el.content = Content::Children(vec![child]),
            Content::Text(_) => return Err(DomError::NotAContainer(parent.to_string())),
        }
        Ok(())
    }

    /// Insert `new` as the next sibling of `reference`.
    pub fn insert_after(&mut self, reference: &str, new: Element) -> Result<(), DomError> {
        let parent_id = self
            .parent_of(reference)
            .map(|p| p.id.clone())
            .ok_or_else(|| DomError::NoParent(reference.to_string()))?;
        let parent = self.require_mut(&parent_id)?;
        let Content::Children(children) = &mut parent.content else {
            return Err(DomError::NotAContainer(parent_id));
        };
        let pos = children
            .iter()
            .position(|c| c.id == reference)
            .ok_or_else(|| DomError::ElementNotFound(reference.to_string()))?;
        children.insert(pos + 1, new);
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), DomError> {
        self.require_mut(id)?.content = Content::Text(text.into());
        Ok(())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).map(Element::text_content)
    }

    pub fn set_display(&mut self, id: &str, display: Display) -> Result<(), DomError> {
        self.require_mut(id)?.display = display;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.require_mut(id)?.add_class(class);
        Ok(())
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.require_mut(id)?.remove_class(class);
        Ok(())
    }

    pub fn toggle_class(
        &mut self,
        id: &str,
        class: &str,
        force: Option<bool>,
    ) -> Result<bool, DomError> {
        Ok(self.require_mut(id)?.toggle_class(class, force))
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Scroll the nearest scroll-container ancestor of `id` so the element is
    /// visible, moving the least distance. Returns true if an offset changed.
    pub fn scroll_into_view(&mut self, id: &str) -> Result<bool, DomError> {
        self.require(id)?;
        let Some(container_id) = self
            .ancestors(id)
            .into_iter()
            .find(|a| self.get(a).is_some_and(|el| el.viewport_height.is_some()))
        else {
            return Ok(false);
        };

        let container = self.require_mut(&container_id)?;
        let Some(viewport) = container.viewport_height else {
            return Ok(false);
        };
        let Some((top, height)) = scroll::child_extent(container, id) else {
            return Ok(false);
        };

        let offset = scroll::nearest_offset(container.scroll_offset, viewport, top, height);
        let max = scroll::content_height(container).saturating_sub(viewport);
        let offset = offset.min(max);
        if offset == container.scroll_offset {
            return Ok(false);
        }
        log::trace!(
            "[scroll] {} offset {} -> {} to reveal {}",
            container_id,
            container.scroll_offset,
            offset,
            id
        );
        container.scroll_offset = offset;
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focus.focused() == Some(id)
    }

    /// Focus a focusable, visible element. Returns the Blur/Focus events produced.
    pub fn focus(&mut self, id: &str) -> Result<Vec<Event>, DomError> {
        let el = self.require(id)?;
        if !el.focusable || el.is_hidden() {
            return Err(DomError::NotFocusable(id.to_string()));
        }
        Ok(self.focus.focus(id))
    }

    /// Release focus from `id` if it holds it, like `element.blur()`.
    pub fn blur(&mut self, id: &str) -> Option<Event> {
        if self.is_focused(id) {
            self.focus.blur()
        } else {
            None
        }
    }

    /// The element itself or its nearest focusable ancestor.
    pub fn focusable_ancestor(&self, id: &str) -> Option<String> {
        std::iter::once(id.to_string())
            .chain(self.ancestors(id))
            .find(|a| self.get(a).is_some_and(|el| el.focusable))
    }

    pub fn focus_next(&mut self) -> Vec<Event> {
        self.focus.focus_next(&self.root)
    }

    pub fn focus_prev(&mut self) -> Vec<Event> {
        self.focus.focus_prev(&self.root)
    }

    /// Clear focus entirely (click on empty space).
    pub fn clear_focus(&mut self) -> Option<Event> {
        self.focus.blur()
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut Timers {
        &mut self.timers
    }
}
