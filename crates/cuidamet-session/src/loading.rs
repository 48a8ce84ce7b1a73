//! Epoch tickets that make simulated-latency completions cancellable.
//!
//! The data loads in this app are `sleep`-backed stand-ins for network
//! fetches. A completion may fire after the user has navigated away or
//! re-triggered the load; tickets let the session tell a current
//! completion from a stale one and drop the latter.

use std::time::Duration;

/// How long the initial catalog "fetch" takes.
pub const INITIAL_LOAD_DELAY: Duration = Duration::from_millis(1500);
/// How long a profile-detail "fetch" takes.
pub const PROFILE_LOAD_DELAY: Duration = Duration::from_millis(1200);
/// How long simulated payment processing takes.
pub const PAYMENT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Identifies one issued load. Presented back to the session by the
/// completion; applies only while still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// Issues tickets and decides whether a presented ticket is still live.
#[derive(Debug, Default)]
pub struct LoadGate {
    epoch: u64,
}

impl LoadGate {
    /// Issue a ticket for a fresh load, superseding earlier ones.
    pub fn issue(&mut self) -> LoadTicket {
        self.epoch += 1;
        LoadTicket { epoch: self.epoch }
    }

    /// Invalidate every outstanding ticket without issuing a new one.
    pub fn cancel(&mut self) {
        self.epoch += 1;
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.epoch == self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut gate = LoadGate::default();
        let first = gate.issue();
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_cancel_invalidates_outstanding_tickets() {
        let mut gate = LoadGate::default();
        let ticket = gate.issue();
        gate.cancel();
        assert!(!gate.is_current(ticket));
    }
}
