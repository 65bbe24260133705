pub mod field_errors;
pub mod pagination;
pub mod report_table;
pub mod status_badge;

pub use field_errors::field_errors;
pub use pagination::pagination;
pub use report_table::report_table;
pub use status_badge::status_badge;
