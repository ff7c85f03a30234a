use std::cell::RefCell;

use crate::event::{EventHandler, SurfaceEvent};

/// A simple event bus for broadcasting surface events to registered handlers
///
/// Handlers run synchronously on the thread that emits, and must not subscribe
/// new handlers to the same bus while they are being called.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        // Subscriptions belong to one bus; a clone starts with none
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handler_count()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Number of subscribed handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: &SurfaceEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(event);
        }
    }
}
