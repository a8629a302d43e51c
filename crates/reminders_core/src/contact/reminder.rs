//! Expiry reminders for client subscriptions.
//!
//! # Responsibility
//! - Select the clients that get the automatic reminder today.
//! - Band clients by how close their expiration is.
//! - Lay out the plain-text reminder body.
//!
//! # Invariants
//! - Only `ClientStatus::Active` clients are reminded or counted as expiring.
//! - Clients without an expiration date are never due and have no urgency.
//! - All date math is in whole calendar days relative to the caller's `today`.

use crate::contact::client::{ClientContact, ClientStatus};
use chrono::{Days, NaiveDate};

/// Days before expiration when the automatic reminder is sent.
pub const REMINDER_LEAD_DAYS: u64 = 2;
/// Horizon of the "expiring soon" dashboard count and warning band.
pub const EXPIRING_SOON_DAYS: i64 = 7;
/// Upper bound of the danger band.
pub const DANGER_DAYS: i64 = 2;

/// Subject of the automatic reminder.
pub const REMINDER_SUBJECT: &str = "Rappel : Votre abonnement expire bientôt";
/// Body of the automatic reminder, wrapped by `compose_reminder_body`.
pub const REMINDER_MESSAGE: &str = "Nous espérons que vous allez bien.

Nous vous informons que votre abonnement expire dans 2 jours.
N'hésitez pas à nous contacter pour le renouveler et continuer à bénéficier de nos services.

Nous serions ravis de vous accompagner pour le renouvellement !";

/// How close a client is to expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExpiryUrgency {
    None,
    /// Expires within `EXPIRING_SOON_DAYS`.
    Warning,
    /// Expires within `DANGER_DAYS`, or already expired.
    Danger,
}

/// Whole days from `today` to the expiration date; negative once expired.
pub fn days_until_expiry(client: &ClientContact, today: NaiveDate) -> Option<i64> {
    client
        .expiration_date
        .map(|expiration| (expiration - today).num_days())
}

/// Returns whether the automatic reminder goes to `client` on `today`.
///
/// Only an exact match on `today + REMINDER_LEAD_DAYS` counts, so each client
/// is reminded once per expiration date.
pub fn is_reminder_due(client: &ClientContact, today: NaiveDate) -> bool {
    if client.status != ClientStatus::Active {
        return false;
    }
    let target = today.checked_add_days(Days::new(REMINDER_LEAD_DAYS));
    match (client.expiration_date, target) {
        (Some(expiration), Some(target)) => expiration == target,
        _ => false,
    }
}

/// Clients due for the automatic reminder on `today`, in input order.
pub fn due_reminders(clients: &[ClientContact], today: NaiveDate) -> Vec<&ClientContact> {
    clients
        .iter()
        .filter(|client| is_reminder_due(client, today))
        .collect()
}

/// Urgency band used to highlight a client row. Status is not considered.
pub fn expiry_urgency(client: &ClientContact, today: NaiveDate) -> ExpiryUrgency {
    match days_until_expiry(client, today) {
        Some(days) if days <= DANGER_DAYS => ExpiryUrgency::Danger,
        Some(days) if days <= EXPIRING_SOON_DAYS => ExpiryUrgency::Warning,
        _ => ExpiryUrgency::None,
    }
}

/// Counts active clients expiring within `EXPIRING_SOON_DAYS`, including
/// those already expired.
pub fn count_expiring_soon(clients: &[ClientContact], today: NaiveDate) -> usize {
    clients
        .iter()
        .filter(|client| client.status == ClientStatus::Active)
        .filter_map(|client| days_until_expiry(client, today))
        .filter(|days| *days <= EXPIRING_SOON_DAYS)
        .count()
}

/// Wraps `message` in the greeting and sign-off sent to clients.
pub fn compose_reminder_body(name: &str, message: &str) -> String {
    format!("Bonjour {name},\n\n{message}\n\nCordialement,\n")
}
