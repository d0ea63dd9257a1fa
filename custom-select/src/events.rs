//! Event handling for the custom select.

use std::time::Instant;

use pagedom::{Document, Event, Key, Modifiers};

use crate::control::CustomSelect;
use crate::search::find_prefix;
use crate::state::Transition;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl CustomSelect {
    /// Dispatch a document event to this control.
    ///
    /// `now` drives the type-ahead debounce. Events aimed at elements this
    /// control does not own are ignored.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event, now: Instant) -> EventResult {
        match event {
            Event::Click { target: Some(target) } => self.on_click(doc, target),
            Event::Blur { target } if *target == self.container_id() => {
                self.apply(doc, Transition::Close);
                EventResult::Consumed
            }
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.container_id() => self.on_key(doc, *key, *modifiers, now),
            _ => EventResult::Ignored,
        }
    }

    /// Fire the type-ahead debounce if it is due. Returns true if the buffer was cleared.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) -> bool {
        let cleared = self.search.expire(doc.timers_mut(), now);
        if cleared {
            log::debug!("[select] {} search buffer reset", self.container_id());
        }
        cleared
    }

    fn on_click(&mut self, doc: &mut Document, target: &str) -> EventResult {
        if doc.is_within(target, self.value_id()) {
            self.apply(doc, Transition::Toggle);
            return EventResult::Consumed;
        }

        let Some(value) = self.clicked_item_value(doc, target) else {
            return EventResult::Ignored;
        };
        if let Err(e) = self.select_value(doc, &value) {
            log::warn!("[select] {} click on stale item {:?}: {}", self.container_id(), value, e);
        }
        self.apply(doc, Transition::Close);
        self.release_focus(doc);
        EventResult::Consumed
    }

    /// Value of the list item at or around `target`.
    fn clicked_item_value(&self, doc: &Document, target: &str) -> Option<String> {
        let list = self.list_id();
        std::iter::once(target.to_string())
            .chain(doc.ancestors(target))
            .find(|id| doc.parent_of(id).is_some_and(|p| p.id == list))
            .and_then(|item| doc.get(&item)?.get_data("value").map(str::to_string))
    }

    fn on_key(&mut self, doc: &mut Document, key: Key, modifiers: Modifiers, now: Instant) -> EventResult {
        // Shortcuts belong to the host
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(' ') => {
                self.apply(doc, Transition::Toggle);
                if self.config().space_blurs {
                    self.release_focus(doc);
                }
            }
            Key::Up => {
                // No wraparound at either end
                if let Some(index) = self.selected_option_index().filter(|&i| i > 0) {
                    self.select_index(doc, index - 1);
                }
            }
            Key::Down => {
                if let Some(index) = self.selected_option_index() {
                    self.select_index(doc, index + 1);
                }
            }
            Key::Enter | Key::Escape => {
                self.apply(doc, Transition::Close);
                self.release_focus(doc);
            }
            Key::Char(c) if !c.is_control() => self.type_ahead(doc, c, now),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    /// Append `c` to the search buffer and select the first label it prefixes.
    /// No match leaves both selection and buffer as they are.
    fn type_ahead(&mut self, doc: &mut Document, c: char, now: Instant) {
        // Honour a debounce that elapsed without a tick.
        self.tick(doc, now);

        let debounce = self.config().debounce();
        self.search.push(doc.timers_mut(), c, now, debounce);

        let query = self.search_buffer();
        match find_prefix(self.options(), query) {
            Some(index) => {
                log::trace!("[select] {} search {:?} -> {}", self.container_id(), query, index);
                self.select_index(doc, index);
            }
            None => log::trace!("[select] {} search {:?} no match", self.container_id(), query),
        }
    }
}
