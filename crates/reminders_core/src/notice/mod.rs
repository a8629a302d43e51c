//! Page notices: flash alert lifetime and delete confirmation.

pub mod alert;
pub mod confirm;
