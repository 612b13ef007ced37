use thiserror::Error;

use crate::terms::EncodingError;

/// Failures of a single DeepL request.
///
/// Each variant names a cause callers can act on; none of them is fatal to
/// an interactive session.
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// Missing, malformed or rejected API key (401/403).
    #[error("authentication failed (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    /// The account's glossary-count or character quota is used up.
    #[error("quota exceeded: {message}")]
    QuotaExceeded { message: String },

    /// The referenced glossary id does not exist.
    #[error("glossary '{0}' not found")]
    NotFound(String),

    /// DeepL rejected the request payload (usually the entries).
    #[error("invalid glossary request: {message}")]
    Validation { message: String },

    /// A term cannot be encoded in the TSV entry format.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Connection, DNS or timeout failure before a response arrived.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// `/v2/translate` answered with a non-2xx status.
    #[error("translation failed (HTTP {status}): {message}")]
    Translation { status: u16, message: String },

    /// Any other non-2xx status from a glossary endpoint.
    #[error("unexpected response (HTTP {status}): {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// A 2xx response whose body could not be decoded.
    #[error("invalid response from DeepL: {0}")]
    InvalidResponse(String),
}

/// HTTP status DeepL uses when a quota is exhausted.
pub const QUOTA_EXCEEDED_STATUS: u16 = 456;

const QUOTA_HINTS: &[&str] = &["quota", "limit", "maximum", "too many glossaries"];

fn mentions_quota(message: &str) -> bool {
    let lower = message.to_lowercase();
    QUOTA_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Maps a failed glossary-endpoint response to an error variant.
///
/// `id` is the glossary the request addressed, if any; a 404 only means
/// "not found" when there was something to find.
pub fn glossary_error(status: u16, message: String, id: Option<&str>) -> GlossaryError {
    match status {
        401 | 403 => GlossaryError::Auth { status, message },
        404 => match id {
            Some(id) => GlossaryError::NotFound(id.to_string()),
            None => GlossaryError::UnexpectedStatus { status, message },
        },
        QUOTA_EXCEEDED_STATUS => GlossaryError::QuotaExceeded { message },
        400..=499 if mentions_quota(&message) => GlossaryError::QuotaExceeded { message },
        400 | 413 | 415 | 422 => GlossaryError::Validation { message },
        _ => GlossaryError::UnexpectedStatus { status, message },
    }
}

/// Maps a failed `/v2/translate` response to an error variant.
pub const fn translation_error(status: u16, message: String) -> GlossaryError {
    GlossaryError::Translation { status, message }
}
