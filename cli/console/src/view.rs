//! Screen lifecycle shared by every console view.

use crate::client::ApiClientError;

/// Lifecycle of one screen's data fetch.
///
/// A view starts [`ViewState::Idle`], moves to [`ViewState::Loading`] when a
/// request departs, and settles on [`ViewState::Success`] or
/// [`ViewState::Error`] when it resolves.
///
/// Resolution is last-write-wins: when an embedder drives overlapping
/// requests into one view, whichever response lands last is the one shown,
/// even if it belongs to the older request. The console issues one request
/// per invocation and never overlaps; callers that do must sequence their
/// own resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// No request has been issued yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest resolved request carried a payload.
    Success(T),
    /// The latest resolved request failed; carries the failure message.
    Error(String),
}

impl<T> ViewState<T> {
    /// A fresh view with no request issued.
    #[must_use]
    pub const fn new() -> Self {
        Self::Idle
    }

    /// Marks a request as departed.
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Applies a request outcome, replacing whatever the view held.
    pub fn resolve(&mut self, outcome: Result<T, ApiClientError>) {
        *self = match outcome {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error.to_string()),
        };
    }

    /// True when the view settled on a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}
