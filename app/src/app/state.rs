//! # Login Screen State
//!
//! State owned by the [`LoginController`](super::LoginController). It is
//! created with the screen and dropped with it.

/// Where the controller is in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Waiting for a submission
    #[default]
    Idle,
    /// A request is in flight
    Loading,
}

/// How the last submission ended.
///
/// Success and Error are transitions out of `Loading`; the controller is
/// back in `Idle` by the time this is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Server accepted the credentials
    Success,
    /// Server rejected them or could not be reached
    Error,
    /// Screen was torn down while the request was in flight
    Cancelled,
    /// Reply could not be handled; the error is returned from `join`
    Fault,
}

/// State the screen renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginUiState {
    /// Drives the progress indicator
    pub is_data_loading: bool,
    pub last_outcome: Option<Outcome>,
}

impl LoginUiState {
    pub fn phase(&self) -> LoginPhase {
        if self.is_data_loading {
            LoginPhase::Loading
        } else {
            LoginPhase::Idle
        }
    }

    pub(crate) fn begin(&mut self) {
        self.is_data_loading = true;
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.is_data_loading = false;
        self.last_outcome = Some(outcome);
    }
}
