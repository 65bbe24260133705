pub mod fields;
pub mod query;
pub mod selection;
pub mod status;
pub mod validation;
