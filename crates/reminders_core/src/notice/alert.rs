//! Flash alert lifetime.
//!
//! # Invariants
//! - An alert is visible until `dismiss_after`, fades for `fade_duration`,
//!   then is removed.
//! - Phases only move forward as elapsed time grows.

use crate::config::UiSettings;
use std::time::Duration;

/// Lifecycle phase of a flash alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    Fading,
    Removed,
}

/// Timing schedule of a single alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTimeline {
    pub dismiss_after: Duration,
    pub fade_duration: Duration,
}

impl AlertTimeline {
    pub fn from_settings(settings: &UiSettings) -> Self {
        Self {
            dismiss_after: Duration::from_millis(settings.alert_dismiss_ms),
            fade_duration: Duration::from_millis(settings.alert_fade_ms),
        }
    }

    /// Total time from display to removal.
    pub fn removed_at(&self) -> Duration {
        self.dismiss_after.saturating_add(self.fade_duration)
    }

    /// Returns the phase `elapsed` after the alert was shown.
    pub fn phase_at(&self, elapsed: Duration) -> AlertPhase {
        if elapsed < self.dismiss_after {
            AlertPhase::Visible
        } else if elapsed < self.removed_at() {
            AlertPhase::Fading
        } else {
            AlertPhase::Removed
        }
    }
}

impl Default for AlertTimeline {
    fn default() -> Self {
        Self::from_settings(&UiSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertPhase, AlertTimeline};
    use std::time::Duration;

    #[test]
    fn default_schedule_matches_page_timings() {
        let timeline = AlertTimeline::default();
        assert_eq!(timeline.removed_at(), Duration::from_millis(5_150));
    }

    #[test]
    fn phases_follow_boundaries() {
        let timeline = AlertTimeline::default();
        assert_eq!(timeline.phase_at(Duration::ZERO), AlertPhase::Visible);
        assert_eq!(
            timeline.phase_at(Duration::from_millis(4_999)),
            AlertPhase::Visible
        );
        assert_eq!(
            timeline.phase_at(Duration::from_millis(5_000)),
            AlertPhase::Fading
        );
        assert_eq!(
            timeline.phase_at(Duration::from_millis(5_149)),
            AlertPhase::Fading
        );
        assert_eq!(
            timeline.phase_at(Duration::from_millis(5_150)),
            AlertPhase::Removed
        );
    }

    #[test]
    fn zero_fade_skips_fading_phase() {
        let timeline = AlertTimeline {
            dismiss_after: Duration::from_millis(10),
            fade_duration: Duration::ZERO,
        };
        assert_eq!(
            timeline.phase_at(Duration::from_millis(10)),
            AlertPhase::Removed
        );
    }
}
