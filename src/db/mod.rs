pub mod appointments;
pub mod connection;
pub mod documents;
pub mod incidents;
pub mod messages;
pub mod residents;
pub mod seed;
pub mod users;

pub use connection::Database;
