//! Drawer naming conventions and behavior flags.

use serde::Deserialize;

pub const DEFAULT_TRIGGER_ATTRIBUTE: &str = "data-drawer-trigger";
pub const DEFAULT_DRAWER_ATTRIBUTE: &str = "data-drawer";
pub const DEFAULT_OPEN_MARKER: &str = "open";

/// Controller configuration.
///
/// Missing fields fall back to their defaults one by one, both through the
/// builder methods and when deserialized (keys are camelCase, matching the
/// options object pages pass in markup). Unknown keys are ignored, and the
/// older option names `drawerTrigger`, `drawerIdentifier` and `openClass`
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawerConfig {
    /// Attribute on trigger elements; its value names the target drawer.
    #[serde(alias = "drawerTrigger")]
    pub trigger_attribute: String,

    /// Attribute on drawer elements; its value is the drawer's own name.
    #[serde(alias = "drawerIdentifier")]
    pub drawer_attribute: String,

    /// Class present on a drawer while it is open.
    #[serde(alias = "openClass")]
    pub open_marker: String,

    /// When true, opening a drawer closes whichever other drawer is open.
    pub exclusive: bool,

    /// When true, page scrolling is frozen while any drawer is open.
    pub lock_scroll: bool,

    /// When true, a trigger click first closes every other open drawer and
    /// then toggles its own. Only meaningful with `exclusive` off.
    pub close_others_on_trigger: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            trigger_attribute: DEFAULT_TRIGGER_ATTRIBUTE.to_string(),
            drawer_attribute: DEFAULT_DRAWER_ATTRIBUTE.to_string(),
            open_marker: DEFAULT_OPEN_MARKER.to_string(),
            exclusive: true,
            lock_scroll: false,
            close_others_on_trigger: false,
        }
    }
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.trigger_attribute = attribute.into();
        self
    }

    pub fn drawer_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.drawer_attribute = attribute.into();
        self
    }

    pub fn open_marker(mut self, marker: impl Into<String>) -> Self {
        self.open_marker = marker.into();
        self
    }

    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Freeze page scroll while a drawer is open.
    pub fn lock_scroll(mut self) -> Self {
        self.lock_scroll = true;
        self
    }

    /// Close all other open drawers before a trigger toggles its own.
    pub fn close_others_on_trigger(mut self) -> Self {
        self.close_others_on_trigger = true;
        self
    }
}
