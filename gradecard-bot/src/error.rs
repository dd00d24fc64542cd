//! Error taxonomy for the lookup pipeline.
//!
//! Each stage has its own enum; [`LookupError`] joins them at the conversation boundary and maps
//! every failure to the text the user sees.

use thiserror::Error;

/// Failure to turn user input into an enrollment number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Input is neither a known alias nor an integer.
    #[error("'{input}' is neither a known alias nor an enrollment number")]
    Unrecognized { input: String },

    /// Alias table is missing or malformed, and the input is not numeric either.
    #[error("alias table unavailable ({reason}) and '{input}' is not numeric")]
    Config { input: String, reason: String },
}

/// Failure to retrieve the grade card page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("portal returned 404 Not Found")]
    NotFound { status: u16 },

    #[error("portal returned HTTP {status}")]
    Transient { status: u16 },

    #[error("request to portal failed: {0}")]
    Network(String),
}

impl FetchError {
    /// True for failures that may go away on a later attempt.
    pub fn is_transient(&self) -> bool {
        !matches!(self, FetchError::NotFound { .. })
    }
}

/// Failure to extract subject rows from the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no result rows found")]
    NoRecordsFound,

    #[error("result row {row} has {cells} cells, expected at least 9")]
    MalformedRow { row: usize, cells: usize },

    #[error("invalid selector: {0}")]
    Selector(String),
}

/// Any failure of the resolve → fetch → parse pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub const MSG_UNRECOGNIZED: &str = "Invalid enrollment number or alias. Please try again.";
pub const MSG_ALIASES_UNAVAILABLE: &str =
    "Aliases are unavailable right now. Please send your numeric enrollment number.";
pub const MSG_TRY_AGAIN_LATER: &str = "Try again later.";
pub const MSG_NOT_FOUND: &str = "Enrollment number not found";
pub const MSG_UNREADABLE_PAGE: &str = "The result page could not be read. Try again later.";

impl LookupError {
    /// Plain-text explanation sent to the user in place of a report.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::Resolve(ResolveError::Unrecognized { .. }) => MSG_UNRECOGNIZED,
            LookupError::Resolve(ResolveError::Config { .. }) => MSG_ALIASES_UNAVAILABLE,
            LookupError::Fetch(_) => MSG_TRY_AGAIN_LATER,
            LookupError::Parse(ParseError::NoRecordsFound) => MSG_NOT_FOUND,
            LookupError::Parse(_) => MSG_UNREADABLE_PAGE,
        }
    }
}
