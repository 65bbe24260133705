// src/auth/otp.rs
//
// One-time-code verification for registration. The original system ships a
// literal fixed code behind a timer; that stub is kept behind a trait so a
// real gateway can replace it without touching the handlers.

use crate::notify::SimulatedSend;

/// Seam for a real OTP provider. `FixedCodeOtp` is a stand-in, not a
/// protocol to reproduce.
pub trait OtpGateway {
    /// Dispatch a code to the destination and return an opaque token the
    /// caller hands back at verification time.
    fn send_otp(&self, destination: &str) -> String;

    fn verify_otp(&self, token: &str, code: &str) -> bool;
}

/// The source system's literal behavior: one fixed code, one simulated
/// delivery delay, verification always against the same code.
pub struct FixedCodeOtp {
    code: &'static str,
    send: SimulatedSend,
}

pub const FIXED_OTP_CODE: &str = "123456";

impl FixedCodeOtp {
    pub fn new(send: SimulatedSend) -> Self {
        Self {
            code: FIXED_OTP_CODE,
            send,
        }
    }
}

impl Default for FixedCodeOtp {
    fn default() -> Self {
        Self::new(SimulatedSend::instant())
    }
}

impl OtpGateway for FixedCodeOtp {
    fn send_otp(&self, destination: &str) -> String {
        // Outcome is always Resolved; the stub cannot fail.
        let _ = self.send.resolve();
        format!("otp:{destination}")
    }

    fn verify_otp(&self, token: &str, code: &str) -> bool {
        token.starts_with("otp:") && code == self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_code_verifies() {
        let otp = FixedCodeOtp::default();
        let token = otp.send_otp("09171234567");
        assert!(otp.verify_otp(&token, "123456"));
        assert!(!otp.verify_otp(&token, "000000"));
    }

    #[test]
    fn foreign_token_never_verifies() {
        let otp = FixedCodeOtp::default();
        assert!(!otp.verify_otp("garbage", "123456"));
    }
}
