use std::time::Duration;

use async_trait::async_trait;
use herald_core::{ExistingComment, HostError, PullRequestRef};

/// Fixed timeout attached to every outbound host API call.
///
/// A timeout surfaces as a [`HostError`] with no status code; there are no
/// automatic retries anywhere.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The host-API operations the notification pipeline depends on.
///
/// Implemented by [`crate::github::GitHubClient`] in production and by mock
/// hosts in tests. All calls are single-attempt and bounded by
/// [`REQUEST_TIMEOUT`].
#[async_trait]
pub trait HostApi {
    /// List open pull requests whose source branch matches the
    /// `owner:branch` head identity, in the order the host returns them.
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
    ) -> Result<Vec<PullRequestRef>, HostError>;

    /// Fetch one page of comments on a pull request. Pages are 1-based; a
    /// page shorter than `per_page` is the last one.
    async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<ExistingComment>, HostError>;

    /// Post a new comment on a pull request, returning its id.
    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<u64, HostError>;

    /// Replace the body of an existing comment, returning its id.
    async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64, HostError>;
}
