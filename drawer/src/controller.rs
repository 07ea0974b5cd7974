//! The drawer state machine.
//!
//! ```text
//! Idle      --open(n)-->    Open(n)
//! Open(n)   --close(n)-->   Idle
//! Open(n)   --open(m)-->    Open(m)   (n closed first)
//! Open(n)   --toggle(n)-->  Idle
//! Open(n)   --toggle(m)-->  Open(m)
//! ```
//!
//! Every operation takes the page explicitly. A name that matches no drawer
//! is logged once and returned as [`DrawerError::NotFound`]; nothing on the
//! page or in the controller changes in that case.

use crate::config::DrawerConfig;
use crate::error::DrawerError;
use crate::surface::DrawerSurface;

/// What an operation did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The drawer went from closed to open.
    Opened(String),
    /// `from` was closed so that `to` could open.
    Switched { from: String, to: String },
    /// The drawer went from open to closed.
    Closed(String),
    /// The drawer was already in the requested state.
    Unchanged(String),
}

#[derive(Debug, Clone, Default)]
pub struct DrawerController {
    config: DrawerConfig,
    open_drawer: Option<String>,
}

impl DrawerController {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            config,
            open_drawer: None,
        }
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Name of the drawer this controller last opened and has not closed.
    pub fn open_drawer(&self) -> Option<&str> {
        self.open_drawer.as_deref()
    }

    /// Whether the named drawer currently carries the open marker.
    /// Unknown names are simply not open.
    pub fn is_open<S: DrawerSurface>(&self, surface: &S, name: &str) -> bool {
        surface
            .find_by_name(&self.config.drawer_attribute, name)
            .is_some_and(|handle| surface.is_open(&handle, &self.config.open_marker))
    }

    pub fn open<S: DrawerSurface>(
        &mut self,
        surface: &mut S,
        name: &str,
    ) -> Result<Transition, DrawerError> {
        let handle = self.locate(surface, name)?;
        let was_open = surface.is_open(&handle, &self.config.open_marker);

        let displaced = self
            .open_drawer
            .clone()
            .filter(|current| self.config.exclusive && current != name);
        let previous = match displaced {
            Some(current) => self.close(surface, &current).ok().map(|_| current),
            None => None,
        };

        surface.set_open(&handle, &self.config.open_marker, true);
        self.open_drawer = Some(name.to_string());
        if self.config.lock_scroll {
            surface.set_scroll_locked(true);
        }

        let transition = match previous {
            Some(from) => Transition::Switched {
                from,
                to: name.to_string(),
            },
            None if was_open => Transition::Unchanged(name.to_string()),
            None => Transition::Opened(name.to_string()),
        };
        log::debug!("[drawer] open({name}): {transition:?}");
        Ok(transition)
    }

    pub fn close<S: DrawerSurface>(
        &mut self,
        surface: &mut S,
        name: &str,
    ) -> Result<Transition, DrawerError> {
        let handle = self.locate(surface, name)?;
        let was_open = surface.is_open(&handle, &self.config.open_marker);

        surface.set_open(&handle, &self.config.open_marker, false);
        if self.open_drawer.as_deref() == Some(name) {
            self.open_drawer = None;
        }
        if self.config.lock_scroll && self.no_drawer_open(surface) {
            surface.set_scroll_locked(false);
        }

        let transition = if was_open {
            Transition::Closed(name.to_string())
        } else {
            Transition::Unchanged(name.to_string())
        };
        log::debug!("[drawer] close({name}): {transition:?}");
        Ok(transition)
    }

    /// Close `name` if it is open, otherwise open it.
    ///
    /// In exclusive mode "open" means "the drawer this controller opened";
    /// otherwise the drawer's own marker decides.
    pub fn toggle<S: DrawerSurface>(
        &mut self,
        surface: &mut S,
        name: &str,
    ) -> Result<Transition, DrawerError> {
        let currently_open = if self.config.exclusive {
            self.open_drawer.as_deref() == Some(name)
        } else {
            let handle = self.locate(surface, name)?;
            surface.is_open(&handle, &self.config.open_marker)
        };

        if currently_open {
            self.close(surface, name)
        } else {
            self.open(surface, name)
        }
    }

    /// Close every open drawer except `keep`. Returns the names closed.
    pub fn close_others<S: DrawerSurface>(&mut self, surface: &mut S, keep: &str) -> Vec<String> {
        self.close_where(surface, |name| name != keep)
    }

    /// Close every open drawer. Returns the names closed.
    pub fn close_all<S: DrawerSurface>(&mut self, surface: &mut S) -> Vec<String> {
        self.close_where(surface, |_| true)
    }

    fn close_where<S: DrawerSurface>(
        &mut self,
        surface: &mut S,
        mut predicate: impl FnMut(&str) -> bool,
    ) -> Vec<String> {
        let open = surface.open_names(&self.config.drawer_attribute, &self.config.open_marker);

        let mut closed = Vec::new();
        for name in open.into_iter().filter(|name| predicate(name)) {
            if let Ok(Transition::Closed(name)) = self.close(surface, &name) {
                closed.push(name);
            }
        }
        closed
    }

    fn no_drawer_open<S: DrawerSurface>(&self, surface: &S) -> bool {
        surface
            .open_names(&self.config.drawer_attribute, &self.config.open_marker)
            .is_empty()
    }

    fn locate<S: DrawerSurface>(&self, surface: &S, name: &str) -> Result<S::Handle, DrawerError> {
        surface
            .find_by_name(&self.config.drawer_attribute, name)
            .ok_or_else(|| {
                let err = DrawerError::NotFound(name.to_string());
                log::error!("[drawer] {err}");
                err
            })
    }
}
