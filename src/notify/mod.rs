// src/notify/mod.rs
//
// Simulated outbound gateway. The original system stands in for every
// network call with a fixed-duration timer that always succeeds; that is
// modeled here as an explicit two-state action so handlers can observe
// Pending vs Resolved and tests can inject a zero delay instead of
// sleeping.

pub mod sms;

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The delay has not elapsed yet (spinner/disabled-button state).
    Pending,
    /// The send completed. Simulated sends never fail; a real gateway's
    /// failure modes would widen this enum.
    Resolved,
}

/// One simulated send: wait out the injected delay, then resolve.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSend {
    delay: Duration,
}

impl SimulatedSend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Zero-delay variant for tests and synchronous handlers.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Block for the injected delay, then resolve. There is no
    /// cancellation and no partial failure; none exist in the source
    /// system.
    pub fn resolve(&self) -> SendOutcome {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        SendOutcome::Resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_send_resolves_without_sleeping() {
        let started = std::time::Instant::now();
        assert_eq!(SimulatedSend::instant().resolve(), SendOutcome::Resolved);
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn delayed_send_still_resolves() {
        let send = SimulatedSend::new(Duration::from_millis(10));
        assert_eq!(send.resolve(), SendOutcome::Resolved);
    }
}
