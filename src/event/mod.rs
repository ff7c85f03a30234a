mod bus;
mod events;

pub use bus::EventBus;
pub use events::SurfaceEvent;

/// Receives every event emitted on an [`EventBus`] it is subscribed to.
pub trait EventHandler {
    fn handle_event(&mut self, event: &SurfaceEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&SurfaceEvent),
{
    fn handle_event(&mut self, event: &SurfaceEvent) {
        self(event)
    }
}
