use crate::primitives::Point;

/// Pointer event delivered to a [`Document`](crate::Document)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Press { position: Point },
    /// Pointer moved
    Move { position: Point },
    /// Primary button released
    Release { position: Point },
    /// Press and release without travel
    Click { position: Point },
}

impl PointerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PointerEvent::Press { .. } => EventKind::Press,
            PointerEvent::Move { .. } => EventKind::Move,
            PointerEvent::Release { .. } => EventKind::Release,
            PointerEvent::Click { .. } => EventKind::Click,
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Press { position }
            | PointerEvent::Move { position }
            | PointerEvent::Release { position }
            | PointerEvent::Click { position } => position,
        }
    }

    /// Whether the event is routed to elements under the pointer
    pub fn is_targeted(&self) -> bool {
        matches!(self.kind(), EventKind::Press | EventKind::Click)
    }
}

/// Kind of a [`PointerEvent`], used to register listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Press,
    Move,
    Release,
    Click,
}
