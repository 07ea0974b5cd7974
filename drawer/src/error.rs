use thiserror::Error;

/// Errors reported by drawer operations.
///
/// These are always recovered locally: the operation that produced one has
/// already logged it and left the controller and page unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawerError {
    /// No element carries the drawer attribute with this name.
    #[error("Drawer with name '{0}' not found")]
    NotFound(String),

    /// The element is not inside any drawer.
    #[error("Element '{0}' is not inside a drawer")]
    NoEnclosingDrawer(String),
}
