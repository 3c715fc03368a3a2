//! Fatal errors and recoverable parse warnings.
//!
//! A [`RirError`] aborts the whole run; the orchestrator returns it to `main`,
//! which alone chooses the process exit code. A [`ParseWarning`] is handed to
//! the diagnostics sink and the offending line is skipped.

use thiserror::Error;

/// Conditions that abort the whole run.
#[derive(Debug, Error)]
pub enum RirError {
    /// Version record missing, unparsable, or outside the 2.x window.
    #[error("expected a version 2.x row with seven fields ({reason}):\n  row = \"{line}\"")]
    FormatVersion { line: String, reason: String },

    /// Detail line of sufficient length whose typed fields fail to decode.
    #[error("malformed detail record ({reason}):\n  row = \"{line}\"")]
    MalformedDetail { line: String, reason: String },

    /// Transport failure or non-success response.
    #[error("download of {url} failed: {reason}")]
    Retrieval { url: String, reason: String },

    #[error("error writing CSV output: {0}")]
    Output(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RirError {
    pub(crate) fn version(line: &str, reason: impl Into<String>) -> Self {
        RirError::FormatVersion {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn detail(line: &str, reason: impl Into<String>) -> Self {
        RirError::MalformedDetail {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Recoverable per-line conditions. The line is skipped and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("row has fewer than six fields; ignoring:\n  row = \"{line}\"")]
    ShortLine { line: String },

    #[error("summary row could not be decoded ({reason}); ignoring:\n  row = \"{line}\"")]
    SummaryDecode { line: String, reason: String },

    #[error("unsupported record type '{kind}'; ignoring:\n  row = \"{line}\"")]
    UnsupportedType { line: String, kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_offending_line() {
        let e = RirError::detail("arin|US|ipv4|x|1|20200101|allocated", "bad address");
        let msg = e.to_string();
        assert!(msg.contains("bad address"));
        assert!(msg.contains("arin|US|ipv4|x|1|20200101|allocated"));
    }

    #[test]
    fn test_retrieval_names_url() {
        let e = RirError::Retrieval {
            url: "http://example.net/stats".to_string(),
            reason: "status 404".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "download of http://example.net/stats failed: status 404"
        );
    }
}
