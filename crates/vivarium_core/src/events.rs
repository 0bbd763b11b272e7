use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use vivarium_data::PetEvent;

/// Receives pet events synchronously, as they happen.
pub trait EvolutionListener: Send {
    fn on_event(&mut self, event: &PetEvent);
}

impl<F> EvolutionListener for F
where
    F: FnMut(&PetEvent) + Send,
{
    fn on_event(&mut self, event: &PetEvent) {
        self(event);
    }
}

/// Bounded, shareable record of events.
///
/// Clones share the same buffer, so one clone can be handed to a pet while
/// another is kept for reading.
#[derive(Clone, Debug)]
pub struct EventLog {
    events: Arc<Mutex<VecDeque<PetEvent>>>,
    max_history: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(100)
    }
}

impl EventLog {
    #[must_use]
    pub fn new(max_history: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::new())),
            max_history: max_history.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the recorded events, oldest first.
    pub fn events(&self) -> Vec<PetEvent> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.iter().cloned().collect()
    }

    /// Removes and returns every recorded event.
    pub fn consume(&self) -> Vec<PetEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.drain(..).collect()
    }
}

impl EvolutionListener for EventLog {
    fn on_event(&mut self, event: &PetEvent) {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        if events.len() >= self.max_history {
            events.pop_front();
        }
        events.push_back(event.clone());
    }
}
