mod admin_tests;
mod guard_tests;
mod public_tests;
mod register_tests;
