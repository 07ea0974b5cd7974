/// Events dispatched through a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer activation of an element.
    Click { target: String },
    /// Form submission, targeted at the form element.
    Submit { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Event::Submit {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Event::Click { target } | Event::Submit { target } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::Submit { .. } => EventKind::Submit,
        }
    }
}

/// Event type used when registering listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}
