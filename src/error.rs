/// Banner text shown for any failed lookup
pub const FETCH_FAILED_MESSAGE: &str =
    "Oops! We cannot process your transaction at this moment. Please try again later.";

/// Banner text shown when no transaction hash was entered
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a transaction hash";

/// Any failure to obtain a decodable transaction record.
///
/// Transport errors, non-success statuses and malformed or empty payloads all
/// collapse here. The reason is kept for logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fetch error: {}", self.reason)
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::new(format!("request failed: {}", err))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::new(format!("invalid response body: {}", err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// Transaction identifier missing or blank; no request was made
    InvalidInput(String),
    Fetch(FetchError),
}

impl SummaryError {
    /// Generic message for the person at the keyboard
    pub fn user_message(&self) -> &'static str {
        match self {
            SummaryError::InvalidInput(_) => EMPTY_INPUT_MESSAGE,
            SummaryError::Fetch(_) => FETCH_FAILED_MESSAGE,
        }
    }
}

impl From<FetchError> for SummaryError {
    fn from(err: FetchError) -> Self {
        SummaryError::Fetch(err)
    }
}

impl std::fmt::Display for SummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SummaryError::Fetch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SummaryError::InvalidInput(_) => None,
            SummaryError::Fetch(e) => Some(e),
        }
    }
}
