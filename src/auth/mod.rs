pub mod otp;
pub mod sessions;
pub mod token;

pub use sessions::{Role, Session};
