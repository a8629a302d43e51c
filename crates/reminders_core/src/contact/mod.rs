//! Client contact helpers.
//!
//! # Responsibility
//! - Provide shallow syntactic email validation.
//! - Normalize phone input into the grouped display form.
//! - Define the client contact record validated before it reaches a form handler.
//! - Pick and word expiry reminders.
//!
//! # Invariants
//! - `is_valid_email` and `format_phone` are pure and never fail.
//! - Helpers never log raw contact values.

pub mod client;
pub mod email;
pub mod phone;
pub mod reminder;
