//! # Login Controller
//!
//! Owns [`LoginUiState`], turns [`LoginUiEvent`]s into API calls and reports
//! the outcome as one-shot [`LoginChannel`] notifications.
//!
//! ```text
//!   Submit / OnGoogleClick
//!            │
//!   Idle ────┴──▶ Loading ──┬── Success(resp) ──▶ OnLoginSuccess ──▶ Idle
//!                           ├── Failure(err)  ──▶ ShowToast      ──▶ Idle
//!                           ├── Transport     ──▶ ShowToast      ──▶ Idle
//!                           ├── other error   ──▶ (join returns it) ─▶ Idle
//!                           └── cancelled     ──▶ (nothing sent)  ──▶ Idle
//! ```
//!
//! Only one request is in flight at a time. Events that arrive while
//! `Loading` are dropped and reported as [`Dispatch::Busy`].
//!
//! Requests run on tokio tasks under a [`CancellationToken`] owned by the
//! controller. Dropping or closing the controller cancels the token; a
//! cancelled request never produces a notification.
//!
//! A reply the controller cannot handle, or a request task that panics, is
//! kept as a fault until [`LoginController::join`] collects it. Loading is
//! cleared either way.

use std::future::Future;
use std::sync::Arc;

use async_channel::{unbounded, Sender};
use parking_lot::{Mutex, RwLock};
use shared::{GoogleLoginRequest, LoginRequest, LoginResponse, NetworkError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::events::{Dispatch, LoginChannel, LoginEvents, LoginUiEvent, TextKey, UiText};
use super::state::{LoginUiState, Outcome};
use crate::core::error::{AppError, Result};
use crate::core::result::ApiResult;
use crate::core::service::AuthService;

type LoginReply = Result<ApiResult<LoginResponse, NetworkError>>;

pub struct LoginController {
    api: Arc<dyn AuthService>,
    state: Arc<RwLock<LoginUiState>>,
    event_tx: Sender<LoginChannel>,
    scope: CancellationToken,
    in_flight: Mutex<Option<JoinHandle<()>>>,
    fault: Arc<Mutex<Option<AppError>>>,
}

impl LoginController {
    /// Create a controller and the single receiver for its notifications.
    pub fn new(api: Arc<dyn AuthService>) -> (Self, LoginEvents) {
        let (event_tx, event_rx) = unbounded();
        let controller = Self {
            api,
            state: Arc::new(RwLock::new(LoginUiState::default())),
            event_tx,
            scope: CancellationToken::new(),
            in_flight: Mutex::new(None),
            fault: Arc::new(Mutex::new(None)),
        };
        (controller, LoginEvents::new(event_rx))
    }

    /// Snapshot of the current state.
    pub fn ui_state(&self) -> LoginUiState {
        self.state.read().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Handle a user event.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_event(&self, event: LoginUiEvent) -> Dispatch {
        match event {
            LoginUiEvent::Submit { email, password } => {
                let api = Arc::clone(&self.api);
                let request = LoginRequest { email, password };
                self.launch("login", async move { api.login(request).await })
            }
            LoginUiEvent::OnGoogleClick(user) => {
                if self.is_closed() {
                    return Dispatch::Refused;
                }
                let Some(request) = GoogleLoginRequest::from_google_user(user) else {
                    tracing::warn!("Google account has no id token; not contacting the API");
                    self.notify(LoginChannel::ShowToast(UiText::Resource(TextKey::GoogleTokenMissing)));
                    return Dispatch::Refused;
                };
                let api = Arc::clone(&self.api);
                self.launch("google_login", async move { api.google_login(request).await })
            }
        }
    }

    /// Wait for the in-flight request, if any, then report the oldest fault
    /// not yet collected.
    ///
    /// Replies the controller cannot handle (see [`AppError::Decode`]) and
    /// panicked request tasks come back here as `Err`, even when later
    /// submissions have completed since. A cancelled request is `Ok`.
    pub async fn join(&self) -> Result<()> {
        let handle = self.in_flight.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::error!(error = %e, "Login task did not complete");
                }
            }
        }
        match self.fault.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Tear down the task scope.
    ///
    /// The in-flight request is cancelled and the notification channel is
    /// closed. Further events are refused.
    pub fn close(&self) {
        if self.scope.is_cancelled() {
            return;
        }
        tracing::debug!("Closing login controller");
        self.scope.cancel();
        self.event_tx.close();
    }

    fn launch<Fut>(&self, operation: &'static str, call: Fut) -> Dispatch
    where
        Fut: Future<Output = LoginReply> + Send + 'static,
    {
        if self.is_closed() {
            tracing::debug!(operation, "Event after close ignored");
            return Dispatch::Refused;
        }

        {
            let mut state = self.state.write();
            if state.is_data_loading {
                tracing::debug!(operation, "Submission ignored: request already in flight");
                return Dispatch::Busy;
            }
            state.begin();
        }
        tracing::info!(operation, from = "Idle", to = "Loading", "Login state transition");

        let submission = Submission {
            operation,
            state: Arc::clone(&self.state),
            fault: Arc::clone(&self.fault),
            finished: false,
        };
        let task = run_submission(submission, call, self.event_tx.clone(), self.scope.child_token());
        *self.in_flight.lock() = Some(tokio::spawn(task));
        Dispatch::Started
    }

    fn notify(&self, event: LoginChannel) {
        if self.event_tx.try_send(event).is_err() {
            tracing::debug!("Notification dropped: no listener");
        }
    }
}

impl Drop for LoginController {
    fn drop(&mut self) {
        self.close();
    }
}

/// Loading flag owned by one request task.
///
/// Dropping it before [`Submission::finish`] (the call panicked, or the
/// runtime dropped the task) still returns the controller to Idle.
struct Submission {
    operation: &'static str,
    state: Arc<RwLock<LoginUiState>>,
    fault: Arc<Mutex<Option<AppError>>>,
    finished: bool,
}

impl Submission {
    fn finish(&mut self, outcome: Outcome) {
        self.finished = true;
        self.state.write().finish(outcome);
        tracing::info!(operation = self.operation, from = "Loading", to = ?outcome, "Login state transition");
    }

    /// Keep `err` for `join`. The oldest uncollected fault wins.
    fn record_fault(&self, err: AppError) {
        tracing::error!(operation = self.operation, error = %err, "Login request failed unexpectedly");
        let mut slot = self.fault.lock();
        if slot.is_none() {
            *slot = Some(err);
        }
    }
}

impl Drop for Submission {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        self.finish(Outcome::Fault);
        self.record_fault(AppError::State(format!("{} request ended without a reply", self.operation)));
    }
}

async fn run_submission<Fut>(
    mut submission: Submission,
    call: Fut,
    event_tx: Sender<LoginChannel>,
    token: CancellationToken,
) where
    Fut: Future<Output = LoginReply>,
{
    let operation = submission.operation;
    let reply = tokio::select! {
        biased;
        _ = token.cancelled() => None,
        reply = call => Some(reply),
    };

    let Some(reply) = reply else {
        submission.finish(Outcome::Cancelled);
        tracing::info!(operation, "Request cancelled with its screen");
        return;
    };

    let (notification, outcome, fault) = match reply {
        Ok(ApiResult::Success(response)) => {
            (Some(LoginChannel::OnLoginSuccess(response)), Outcome::Success, None)
        }
        Ok(ApiResult::Failure(error)) => {
            let text = if error.message.trim().is_empty() {
                UiText::Resource(TextKey::SomethingWentWrong)
            } else {
                UiText::Dynamic(error.message)
            };
            (Some(LoginChannel::ShowToast(text)), Outcome::Error, None)
        }
        Err(AppError::Transport(e)) => {
            tracing::warn!(operation, error = %e, "Server unreachable");
            (
                Some(LoginChannel::ShowToast(UiText::Resource(TextKey::NetworkUnavailable))),
                Outcome::Error,
                None,
            )
        }
        Err(
            err @ (AppError::Decode { .. }
            | AppError::Config(_)
            | AppError::State(_)
            | AppError::Io(_)),
        ) => (None, Outcome::Fault, Some(err)),
    };

    submission.finish(outcome);

    if let Some(err) = fault {
        submission.record_fault(err);
        return;
    }

    // Teardown may have raced the reply.
    if token.is_cancelled() {
        return;
    }

    if let Some(event) = notification {
        if event_tx.send(event).await.is_err() {
            tracing::debug!(operation, "Notification dropped: no listener");
        }
    }
}
