/// A failed call against the host's REST API.
///
/// Carries the HTTP status code when the failure came with one; transport
/// failures and timeouts have no status.
///
/// # Examples
///
/// ```
/// use herald_core::HostError;
///
/// let err = HostError::new(Some(401), "Unauthorized");
/// assert_eq!(err.status, Some(401));
/// assert_eq!(err.to_string(), "Unauthorized");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    /// HTTP status code, when the host returned one.
    pub status: Option<u16>,
    /// Human-readable failure description.
    pub message: String,
}

impl HostError {
    /// Create a host error from an optional status code and a message.
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Errors that can occur across the Herald crates.
///
/// Each variant wraps a specific failure domain. Library crates use this type
/// directly; the binary crate converts to `miette::Report` at the boundary.
/// The host-API variants carry the exact messages surfaced to operators in
/// the failed pipeline step.
///
/// # Examples
///
/// ```
/// use herald_core::{HeraldError, HostError};
///
/// let err = HeraldError::CreateComment {
///     number: 5,
///     source: HostError::new(Some(403), "Forbidden"),
/// };
/// assert_eq!(err.to_string(), "Failed to create comment on PR #5");
/// assert!(err.is_authorization());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum HeraldError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed trigger event payload.
    #[error("event payload error: {0}")]
    Payload(String),

    /// The "list pull requests by head" call failed.
    #[error("Failed to query pull requests")]
    PullRequestQuery(#[source] HostError),

    /// Fetching the comments on a pull request failed.
    #[error("Failed to query existing comments on PR #{number}")]
    CommentQuery {
        number: u64,
        #[source]
        source: HostError,
    },

    /// Posting a new comment failed.
    #[error("Failed to create comment on PR #{number}")]
    CreateComment {
        number: u64,
        #[source]
        source: HostError,
    },

    /// Editing a previously posted comment failed.
    #[error("Failed to update comment on PR #{number}")]
    UpdateComment {
        number: u64,
        #[source]
        source: HostError,
    },
}

impl HeraldError {
    /// HTTP status carried by the underlying host failure, if any.
    pub fn host_status(&self) -> Option<u16> {
        match self {
            Self::PullRequestQuery(source)
            | Self::CommentQuery { source, .. }
            | Self::CreateComment { source, .. }
            | Self::UpdateComment { source, .. } => source.status,
            _ => None,
        }
    }

    /// True when the underlying failure indicates a token or permission
    /// problem (status 401, 403, or 404).
    pub fn is_authorization(&self) -> bool {
        matches!(self.host_status(), Some(401 | 403 | 404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HeraldError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn query_error_message_is_stable() {
        let err = HeraldError::PullRequestQuery(HostError::new(Some(401), "Unauthorized"));
        assert_eq!(err.to_string(), "Failed to query pull requests");
    }

    #[test]
    fn mutation_errors_carry_pr_number() {
        let err = HeraldError::CreateComment {
            number: 5,
            source: HostError::new(Some(403), "Forbidden"),
        };
        assert_eq!(err.to_string(), "Failed to create comment on PR #5");

        let err = HeraldError::UpdateComment {
            number: 7,
            source: HostError::new(Some(404), "Not Found"),
        };
        assert_eq!(err.to_string(), "Failed to update comment on PR #7");
    }

    #[test]
    fn authorization_statuses_are_recognized() {
        for status in [401, 403, 404] {
            let err = HeraldError::PullRequestQuery(HostError::new(Some(status), "denied"));
            assert!(err.is_authorization(), "status {status} is authorization");
        }
    }

    #[test]
    fn other_statuses_are_not_authorization() {
        let err = HeraldError::CommentQuery {
            number: 5,
            source: HostError::new(Some(500), "Internal Server Error"),
        };
        assert!(!err.is_authorization());

        let err = HeraldError::PullRequestQuery(HostError::new(None, "timed out"));
        assert!(!err.is_authorization());

        let err = HeraldError::Config("bad".into());
        assert!(!err.is_authorization());
        assert_eq!(err.host_status(), None);
    }

    #[test]
    fn source_chain_preserves_cause() {
        use std::error::Error;

        let err = HeraldError::CommentQuery {
            number: 5,
            source: HostError::new(Some(500), "Internal Server Error"),
        };
        let cause = err.source().expect("has cause");
        assert_eq!(cause.to_string(), "Internal Server Error");
    }
}
