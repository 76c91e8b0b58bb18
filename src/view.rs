//! Caller-owned view state for an interactive front end
//!
//! Holds the input text, whether the summary page is showing, and a timed
//! error banner. The lookup itself never touches this; the caller feeds
//! results in through [`ViewState::apply`].

use {
    crate::{error::SummaryError, normalizer::TransactionSummary},
    std::time::{Duration, Instant},
};

/// How long an error banner stays up
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    pub raised_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub input: String,
    pub summary_visible: bool,
    pub error: Option<ErrorBanner>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Validate the input and open the summary page
    ///
    /// Returns the identifier to look up. Blank input raises the banner and
    /// leaves the page closed.
    pub fn submit(&mut self, now: Instant) -> Result<String, SummaryError> {
        let transaction_id = self.input.trim();
        if transaction_id.is_empty() {
            let err = SummaryError::InvalidInput("transaction id is empty".to_string());
            self.raise(err.user_message(), now);
            return Err(err);
        }

        self.summary_visible = true;
        Ok(transaction_id.to_string())
    }

    /// Fold a finished lookup back into the view
    pub fn apply(&mut self, result: &Result<TransactionSummary, SummaryError>, now: Instant) {
        if let Err(e) = result {
            self.summary_visible = false;
            self.raise(e.user_message(), now);
        }
    }

    pub fn go_back(&mut self) {
        self.summary_visible = false;
    }

    /// Drop the banner once it has been up for [`ERROR_BANNER_TTL`]
    pub fn expire_banner(&mut self, now: Instant) {
        let expired = self
            .error
            .as_ref()
            .is_some_and(|b| now.saturating_duration_since(b.raised_at) >= ERROR_BANNER_TTL);
        if expired {
            self.error = None;
        }
    }

    /// Three-state reading of the view; `Loading` until a result is in hand
    pub fn phase(&self, result: Option<&Result<TransactionSummary, SummaryError>>) -> ViewPhase {
        match (self.summary_visible, result) {
            (true, None) => ViewPhase::Loading,
            (true, Some(Ok(_))) => ViewPhase::Success,
            (_, Some(Err(_))) => ViewPhase::Error,
            (false, _) if self.error.is_some() => ViewPhase::Error,
            (false, _) => ViewPhase::Idle,
        }
    }

    fn raise(&mut self, message: &str, now: Instant) {
        self.error = Some(ErrorBanner {
            message: message.to_string(),
            raised_at: now,
        });
    }
}
