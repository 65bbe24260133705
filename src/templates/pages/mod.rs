pub mod admin_appointments;
pub mod admin_dashboard;
pub mod admin_documents;
pub mod admin_incidents;
pub mod admin_messages;
pub mod admin_reports;
pub mod admin_residents;
pub mod appointments;
pub mod documents;
pub mod home;
pub mod incidents;
pub mod login;
pub mod register;
