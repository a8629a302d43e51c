//! Submit control state.
//!
//! A form submit marks its button as loading and disables it so the same
//! form cannot be posted twice.

/// State of a form submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitControl {
    #[default]
    Idle,
    /// Submission in flight: loading marker set, control disabled.
    Loading,
}

impl SubmitControl {
    /// Marks a submission as started.
    ///
    /// Returns `true` when this call started the submission, `false` when
    /// one was already in flight.
    pub fn begin_submit(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Loading;
                true
            }
            Self::Loading => false,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
