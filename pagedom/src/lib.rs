pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod native;
pub mod scroll;
pub mod timer;

pub use document::Document;
pub use element::{Content, Display, Element};
pub use error::DomError;
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use timer::{TimerId, Timers};
