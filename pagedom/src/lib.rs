pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod query;

pub use document::{Document, Listener};
pub use element::{Content, Element};
pub use error::DomError;
pub use event::{Event, EventKind};
pub use query::{closest, query_selector, query_selector_all, query_selector_position, Selector};
