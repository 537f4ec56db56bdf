use thiserror::Error;

/// Errors surfaced by an order search.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No criteria were added; nothing is sent.
    #[error("add search criteria first")]
    EmptyCriteria,

    /// Transport failure, non-success status or unreadable body.
    /// Details are logged by the caller, not carried here.
    #[error("search failed")]
    SearchFailed,
}

impl SearchError {
    /// Localization key of the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            SearchError::EmptyCriteria => "search.addCriteriaError",
            SearchError::SearchFailed => "search.errorDescription",
        }
    }
}
