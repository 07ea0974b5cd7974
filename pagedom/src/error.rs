use thiserror::Error;

/// Errors raised by document operations that address an element by id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    #[error("Element '{0}' cannot hold children")]
    NotAContainer(String),
}
