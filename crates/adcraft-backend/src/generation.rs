use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Token of one issued request. Only the newest ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared counter used to discard results of superseded requests: every new
/// request advances it, and a result is applied only if its ticket is still
/// the latest one.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter(Arc<AtomicU64>);

impl GenerationCounter {
    pub fn advance(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let counter = GenerationCounter::default();
        let first = counter.advance();
        assert!(counter.is_current(first));

        let second = counter.clone().advance();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }
}
