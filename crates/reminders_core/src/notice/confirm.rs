//! Delete confirmation gate.
//!
//! Delete actions only proceed after the user accepts the confirmation
//! prompt. How the prompt is shown is up to the `Confirmer`.

use crate::config::UiSettings;
use log::info;

/// Asks the user a yes/no question.
pub trait Confirmer {
    /// Returns `true` when the user accepts `message`.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Outcome of a delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Proceed,
    /// The default delete action must be prevented.
    Cancelled,
}

/// Prompts with the configured message and returns the decision.
pub fn guard_delete<C>(confirmer: &mut C, settings: &UiSettings) -> DeleteDecision
where
    C: Confirmer + ?Sized,
{
    if confirmer.confirm(&settings.delete_confirm_message) {
        DeleteDecision::Proceed
    } else {
        info!("event=delete_confirm module=notice status=cancelled");
        DeleteDecision::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::{guard_delete, DeleteDecision};
    use crate::config::{UiSettings, DEFAULT_DELETE_CONFIRM_MESSAGE};

    #[test]
    fn accepted_prompt_proceeds() {
        let mut seen = Vec::new();
        let mut confirmer = |message: &str| {
            seen.push(message.to_string());
            true
        };
        let decision = guard_delete(&mut confirmer, &UiSettings::default());
        assert_eq!(decision, DeleteDecision::Proceed);
        assert_eq!(seen, vec![DEFAULT_DELETE_CONFIRM_MESSAGE.to_string()]);
    }

    #[test]
    fn declined_prompt_cancels() {
        let mut confirmer = |_: &str| false;
        let decision = guard_delete(&mut confirmer, &UiSettings::default());
        assert_eq!(decision, DeleteDecision::Cancelled);
    }
}
