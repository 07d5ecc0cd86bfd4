//! Input validation for sign-up and profile forms

pub mod email;

pub use email::is_valid_email;
