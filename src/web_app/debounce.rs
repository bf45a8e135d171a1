// web_app/debounce.rs - Trailing-edge debounce bookkeeping
//
// The timer itself belongs to the platform (a browser timeout in the search
// box). This type decides which timer is still allowed to fire: every new
// input issues a fresh ticket and invalidates the previous one, so at most
// one pending value exists at any time.

use std::time::Duration;

/// Quiet period before the search box commits its text to the URL
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(700);

/// Identifies one scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record new input. The returned ticket is the only one that may fire.
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Called when the timer for `ticket` expires. Yields the pending value
    /// only if no newer input arrived in between.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending value (unmount). Outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_fires() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.push("r");
        let second = debouncer.push("re");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), Some("re"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.push(1);
        assert_eq!(debouncer.fire(ticket), Some(1));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_cancel_invalidates() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.push("x");
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(Debouncer::<()>::default().delay(), Duration::from_millis(700));
    }
}
