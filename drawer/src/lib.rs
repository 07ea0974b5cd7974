//! Coordination of named drawer panels on a page.
//!
//! A [`DrawerController`] tracks which drawer, if any, is open and keeps the
//! page's open markers in agreement with that state. It talks to the page
//! through the [`DrawerSurface`] capability, implemented here for
//! [`pagedom::Document`]. [`init`] wires trigger elements to the controller.

pub mod binding;
pub mod config;
pub mod controller;
pub mod error;
pub mod surface;

pub use binding::{close_enclosing, close_on_submit, init, SharedController, TRIGGER_LISTENER_KEY};
pub use config::DrawerConfig;
pub use controller::{DrawerController, Transition};
pub use error::DrawerError;
pub use surface::DrawerSurface;
