//! Finite state machines for widget interaction states
//!
//! A state machine is a flat transition table keyed by `(state, event)`.
//! Events with no matching transition leave the machine where it is.
//!
//! ```rust
//! use shutter_core::{event_types, StateMachine};
//!
//! const IDLE: u32 = 0;
//! const PRESSED: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(IDLE)
//!     .on(IDLE, event_types::POINTER_DOWN, PRESSED)
//!     .on(PRESSED, event_types::POINTER_UP, IDLE)
//!     .build();
//!
//! assert!(fsm.send(event_types::POINTER_DOWN));
//! assert_eq!(fsm.current(), PRESSED);
//! assert!(!fsm.send(event_types::POINTER_DOWN));
//! ```

use rustc_hash::FxHashMap;

use crate::events::EventType;

/// State identifier
pub type StateId = u32;

/// A finite state machine over `StateId`s driven by `EventType`s
#[derive(Clone, Debug)]
pub struct StateMachine {
    current: StateId,
    transitions: FxHashMap<(StateId, EventType), StateId>,
}

impl StateMachine {
    /// Start building a machine that begins in `initial`
    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder {
            initial,
            transitions: FxHashMap::default(),
        }
    }

    /// Current state
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Deliver an event; returns true if a transition fired
    pub fn send(&mut self, event: EventType) -> bool {
        match self.transitions.get(&(self.current, event)) {
            Some(&next) => {
                tracing::trace!(from = self.current, to = next, event, "fsm transition");
                self.current = next;
                true
            }
            None => false,
        }
    }
}

/// Builder for `StateMachine`
pub struct StateMachineBuilder {
    initial: StateId,
    transitions: FxHashMap<(StateId, EventType), StateId>,
}

impl StateMachineBuilder {
    /// Add a transition `from --event--> to`
    ///
    /// A later transition for the same `(from, event)` replaces an earlier one.
    pub fn on(mut self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transitions.insert((from, event), to);
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current: self.initial,
            transitions: self.transitions,
        }
    }
}
