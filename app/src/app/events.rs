//! # Login Events
//!
//! Events flowing into the controller from the screen, and one-shot
//! notifications flowing back out.

use async_channel::{Receiver, TryRecvError};
use shared::{GoogleUser, LoginResponse};

/// User actions forwarded to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginUiEvent {
    /// Login button pressed with validated credentials
    Submit { email: String, password: String },
    /// Google sign-in returned an account
    OnGoogleClick(GoogleUser),
}

/// One-shot notifications for the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginChannel {
    /// Show a transient message
    ShowToast(UiText),
    /// Navigate away with the session
    OnLoginSuccess(LoginResponse),
}

/// Text shown to the user: either verbatim from the server or a client-side key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiText {
    Dynamic(String),
    Resource(TextKey),
}

/// Client-side messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    NetworkUnavailable,
    SomethingWentWrong,
    GoogleTokenMissing,
}

impl TextKey {
    pub fn as_str(self) -> &'static str {
        match self {
            TextKey::NetworkUnavailable => "Unable to reach the server. Check your connection and try again.",
            TextKey::SomethingWentWrong => "Something went wrong. Please try again.",
            TextKey::GoogleTokenMissing => "Google sign-in did not return a token. Please try again.",
        }
    }
}

impl UiText {
    pub fn as_string(&self) -> String {
        match self {
            UiText::Dynamic(text) => text.clone(),
            UiText::Resource(key) => key.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for UiText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiText::Dynamic(text) => f.write_str(text),
            UiText::Resource(key) => f.write_str(key.as_str()),
        }
    }
}

/// What the controller did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A request was started
    Started,
    /// A request is already in flight; the event was dropped
    Busy,
    /// The event was rejected without a request (closed screen, missing token)
    Refused,
}

/// Receiving end of the controller's notifications.
///
/// There is exactly one per controller and it cannot be cloned, so every
/// notification reaches a single listener once. Nothing is replayed.
#[derive(Debug)]
pub struct LoginEvents {
    rx: Receiver<LoginChannel>,
}

impl LoginEvents {
    pub(crate) fn new(rx: Receiver<LoginChannel>) -> Self {
        Self { rx }
    }

    /// Wait for the next notification. `None` once the controller is gone
    /// and the queue is drained.
    pub async fn recv(&self) -> Option<LoginChannel> {
        self.rx.recv().await.ok()
    }

    /// Take a pending notification without waiting.
    pub fn try_recv(&self) -> Option<LoginChannel> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => None,
        }
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}
