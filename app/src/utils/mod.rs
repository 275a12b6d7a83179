//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Email and password checks that gate the login button

pub mod validation;

pub use validation::{is_valid_email, is_valid_password};
