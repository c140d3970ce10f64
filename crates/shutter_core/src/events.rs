//! Pointer events delivered by the host platform
//!
//! Coordinates are in the same logical-pixel space as the bounds the host
//! passes to a widget's `render`.

use crate::geometry::Point;

/// Numeric event type, used as the transition key in state machines
pub type EventType = u32;

/// Well-known event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// The platform took the pointer away (scroll capture, window blur, ...)
    pub const POINTER_CANCEL: EventType = 6;
}

/// Event payload
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
        pressure: f32,
    },
    None,
}

/// An input event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Milliseconds since an arbitrary host-defined epoch
    pub timestamp: u64,
}

impl Event {
    /// Create a primary-button pointer event at `(x, y)`
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer {
                x,
                y,
                button: 0,
                pressure: 1.0,
            },
            timestamp: 0,
        }
    }

    /// Create an event without a payload
    pub fn bare(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
            timestamp: 0,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Pointer position, if this event carries one
    pub fn position(&self) -> Option<Point> {
        match self.data {
            EventData::Pointer { x, y, .. } => Some(Point::new(x, y)),
            EventData::None => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.data, EventData::Pointer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_event_position() {
        let event = Event::pointer(event_types::POINTER_DOWN, 12.0, 30.5).with_timestamp(42);
        assert!(event.is_pointer());
        assert_eq!(event.position(), Some(Point::new(12.0, 30.5)));
        assert_eq!(event.timestamp, 42);
    }

    #[test]
    fn test_bare_event_has_no_position() {
        let event = Event::bare(event_types::POINTER_CANCEL);
        assert!(!event.is_pointer());
        assert_eq!(event.position(), None);
        assert_eq!(event.data, EventData::None);
    }
}
