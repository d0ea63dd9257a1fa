//! A styled dropdown that replaces a native `<select>` while keeping it
//! authoritative for form submission.
//!
//! The native element stays in the document (hidden) and every selection
//! change is written back to it, so external code reading the form sees the
//! same value the widget displays.

pub mod bootstrap;
pub mod config;
pub mod control;
pub mod error;
pub mod events;
pub mod model;
pub mod search;
pub mod state;

pub use bootstrap::{enhance_all, route_event, tick_all};
pub use config::SelectConfig;
pub use control::CustomSelect;
pub use error::SelectError;
pub use events::EventResult;
pub use model::{build_options, OptionRecord};
pub use state::{ListState, SearchBuffer, Transition};
