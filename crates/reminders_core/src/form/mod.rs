//! Form interaction helpers.
//!
//! # Responsibility
//! - Pick default values for empty date inputs.
//! - Track the submit control while a submission is in flight.
//! - Copy message templates into the message field.

pub mod date;
pub mod submit;
pub mod template;
