// src/notify/sms.rs
//
// Messaging gateway used by the chairperson's broadcast page. Behind the
// trait so the simulated gateway can be swapped for a real SMS provider;
// the handlers only see a receipt.

use crate::notify::{SendOutcome, SimulatedSend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub destination: String,
    pub outcome: SendOutcome,
}

pub trait SmsGateway {
    fn send(&self, destination: &str, body: &str) -> DeliveryReceipt;
}

/// Timer-backed stand-in: waits out its injected delay and reports
/// delivery unconditionally, exactly like the source system's fake sends.
pub struct SimulatedSms {
    send: SimulatedSend,
}

impl SimulatedSms {
    pub fn new(send: SimulatedSend) -> Self {
        Self { send }
    }
}

impl Default for SimulatedSms {
    fn default() -> Self {
        Self::new(SimulatedSend::instant())
    }
}

impl SmsGateway for SimulatedSms {
    fn send(&self, destination: &str, _body: &str) -> DeliveryReceipt {
        DeliveryReceipt {
            destination: destination.to_string(),
            outcome: self.send.resolve(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_send_always_delivers() {
        let sms = SimulatedSms::default();
        let receipt = sms.send("09171234567", "Barangay assembly on Saturday");
        assert_eq!(receipt.outcome, SendOutcome::Resolved);
        assert_eq!(receipt.destination, "09171234567");
    }
}
