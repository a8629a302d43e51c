//! Client reminders helpers.
//! Pure contact checks plus the small page behaviors around the client forms.

pub mod config;
pub mod contact;
pub mod form;
pub mod logging;
pub mod notice;

pub use config::{ConfigError, UiSettings};
pub use contact::client::{filter_clients, ClientContact, ClientStatus, ClientValidationError};
pub use contact::email::is_valid_email;
pub use contact::phone::{format_phone, phone_digits, PHONE_GROUPED_DIGITS};
pub use contact::reminder::{
    compose_reminder_body, count_expiring_soon, days_until_expiry, due_reminders,
    expiry_urgency, is_reminder_due, ExpiryUrgency, REMINDER_MESSAGE, REMINDER_SUBJECT,
};
pub use form::date::{default_date_value, today_utc};
pub use form::submit::SubmitControl;
pub use form::template::{apply_message_template, MessageField};
pub use logging::{default_log_level, init_logging, logging_status};
pub use notice::alert::{AlertPhase, AlertTimeline};
pub use notice::confirm::{guard_delete, Confirmer, DeleteDecision};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
