//! Client contact record.
//!
//! # Responsibility
//! - Hold the fields captured by the client form.
//! - Validate required fields before a record is accepted.
//!
//! # Invariants
//! - `name` and `email` are required; `email` must pass `is_valid_email`.
//! - `expiration_date` is required.
//! - A normalized phone is either `None` or the `format_phone` display form.

use crate::contact::email::is_valid_email;
use crate::contact::phone::format_phone;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Follow-up status of a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    /// Receives reminders.
    #[default]
    #[serde(rename = "actif")]
    Active,
    /// Kept on file, no reminders.
    #[serde(rename = "inactif")]
    Inactive,
}

/// Client contact as captured by the client form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub last_visit: Option<NaiveDate>,
    /// Date the reminder is about. Required by `validate`.
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: ClientStatus,
}

/// Validation errors for `ClientContact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientValidationError {
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    MissingExpirationDate,
}

impl Display for ClientValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "client name cannot be empty"),
            Self::EmptyEmail => write!(f, "client email cannot be empty"),
            Self::InvalidEmail => write!(f, "client email is not a valid address"),
            Self::MissingExpirationDate => write!(f, "client expiration date is required"),
        }
    }
}

impl Error for ClientValidationError {}

impl ClientContact {
    /// Creates an active client with the required fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            last_visit: None,
            expiration_date: Some(expiration_date),
            notes: None,
            status: ClientStatus::Active,
        }
    }

    /// Checks required fields and the email shape.
    ///
    /// Fields are checked in form order; the first failure is returned.
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        let result = self.check_fields();
        if let Err(err) = &result {
            // Field values stay out of logs.
            debug!("event=client_validate module=contact status=rejected reason={err:?}");
        }
        result
    }

    fn check_fields(&self) -> Result<(), ClientValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClientValidationError::EmptyName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ClientValidationError::EmptyEmail);
        }
        if !is_valid_email(email) {
            return Err(ClientValidationError::InvalidEmail);
        }
        if self.expiration_date.is_none() {
            return Err(ClientValidationError::MissingExpirationDate);
        }
        Ok(())
    }

    /// Returns a copy with trimmed text fields and a display-formatted phone.
    ///
    /// Phones without any digit collapse to `None`.
    pub fn normalized(&self) -> Self {
        let phone = self
            .phone
            .as_deref()
            .map(format_phone)
            .filter(|value| !value.is_empty());
        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone,
            notes,
            ..self.clone()
        }
    }

    /// Returns whether `query` occurs in the name, email or phone.
    ///
    /// ASCII letters compare case-insensitively; a blank query matches
    /// every client.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return true;
        }
        [Some(self.name.as_str()), Some(self.email.as_str()), self.phone.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_ascii_lowercase().contains(&needle))
    }

    /// Returns whether the expiration date is strictly before `date`.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiration_date
            .map(|expiration| expiration < date)
            .unwrap_or(false)
    }
}

/// Clients matching `query` and, when given, `status`, in input order.
pub fn filter_clients<'a>(
    clients: &'a [ClientContact],
    query: &str,
    status: Option<ClientStatus>,
) -> Vec<&'a ClientContact> {
    clients
        .iter()
        .filter(|client| status.is_none() || status == Some(client.status))
        .filter(|client| client.matches_search(query))
        .collect()
}
