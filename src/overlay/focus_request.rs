use std::time::{Duration, Instant};

/// Deferred request to focus the search input once the overlay has been drawn
#[derive(Debug, Default)]
pub struct FocusRequest {
    deadline: Option<Instant>,
}

impl FocusRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the request so it becomes due `delay` after `now`
    pub fn schedule_at(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
