//! Page bootstrap: enhance every marked native select.

use std::time::Instant;

use pagedom::{Document, Event};

use crate::config::SelectConfig;
use crate::control::CustomSelect;
use crate::error::SelectError;
use crate::events::EventResult;

/// Build one control per `<select>` carrying the `data-{marker}` attribute,
/// in document order.
pub fn enhance_all(
    doc: &mut Document,
    config: &SelectConfig,
) -> Result<Vec<CustomSelect>, SelectError> {
    let marked = doc.query_all(|el| el.tag == "select" && el.data.contains_key(&config.marker));
    log::info!("[bootstrap] enhancing {} select(s)", marked.len());

    marked
        .iter()
        .map(|id| CustomSelect::new(doc, id, config.clone()))
        .collect()
}

/// Offer `event` to each control until one consumes it.
pub fn route_event(
    controls: &mut [CustomSelect],
    doc: &mut Document,
    event: &Event,
    now: Instant,
) -> EventResult {
    for control in controls.iter_mut() {
        if control.handle_event(doc, event, now).is_handled() {
            return EventResult::Consumed;
        }
    }
    EventResult::Ignored
}

/// Fire due timers on every control. Returns true if any state changed.
pub fn tick_all(controls: &mut [CustomSelect], doc: &mut Document, now: Instant) -> bool {
    controls
        .iter_mut()
        .fold(false, |changed, control| control.tick(doc, now) || changed)
}
