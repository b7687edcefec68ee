use async_trait::async_trait;
use herald_core::{ExistingComment, HeraldError, HostError, PullRequestRef};
use octocrab::models::CommentId;
use octocrab::params;

use crate::host::{HostApi, REQUEST_TIMEOUT};

/// GitHub client for locating pull requests and managing comments.
///
/// Thin [`HostApi`] adapter over octocrab: every call is bounded by
/// [`REQUEST_TIMEOUT`] and mapped into a [`HostError`] that preserves the
/// HTTP status code, which the pipeline needs to recognize token problems.
pub struct GitHubClient {
    octocrab: octocrab::Octocrab,
}

impl GitHubClient {
    /// Create a client from an explicit token or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Config`] if no token is available or the
    /// client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use herald_notify::GitHubClient;
    ///
    /// let client = GitHubClient::new(Some("ghp_xxxx")).unwrap();
    /// ```
    pub fn new(token: Option<&str>) -> Result<Self, HeraldError> {
        let token = match token {
            Some(t) => t.to_string(),
            None => std::env::var("GITHUB_TOKEN").map_err(|_| {
                HeraldError::Config(
                    "GITHUB_TOKEN not set. Pass --github-token or set GITHUB_TOKEN env var".into(),
                )
            })?,
        };

        let octocrab = octocrab::Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| HeraldError::Config(format!("failed to create GitHub client: {e}")))?;

        Ok(Self { octocrab })
    }
}

#[async_trait]
impl HostApi for GitHubClient {
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
    ) -> Result<Vec<PullRequestRef>, HostError> {
        let page = tokio::time::timeout(
            REQUEST_TIMEOUT,
            self.octocrab
                .pulls(owner, repo)
                .list()
                .state(params::State::Open)
                .head(head)
                .send(),
        )
        .await
        .map_err(|_| timeout_error())?
        .map_err(host_error)?;

        Ok(page
            .items
            .into_iter()
            .map(|pr| PullRequestRef { number: pr.number })
            .collect())
    }

    async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<ExistingComment>, HostError> {
        let comments = tokio::time::timeout(
            REQUEST_TIMEOUT,
            self.octocrab
                .issues(owner, repo)
                .list_comments(number)
                .per_page(per_page)
                .page(page)
                .send(),
        )
        .await
        .map_err(|_| timeout_error())?
        .map_err(host_error)?;

        Ok(comments
            .items
            .into_iter()
            .map(|c| ExistingComment {
                id: c.id.into_inner(),
                body: c.body.unwrap_or_default(),
            })
            .collect())
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<u64, HostError> {
        let comment = tokio::time::timeout(
            REQUEST_TIMEOUT,
            self.octocrab.issues(owner, repo).create_comment(number, body),
        )
        .await
        .map_err(|_| timeout_error())?
        .map_err(host_error)?;

        Ok(comment.id.into_inner())
    }

    async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64, HostError> {
        let comment = tokio::time::timeout(
            REQUEST_TIMEOUT,
            self.octocrab
                .issues(owner, repo)
                .update_comment(CommentId(comment_id), body),
        )
        .await
        .map_err(|_| timeout_error())?
        .map_err(host_error)?;

        Ok(comment.id.into_inner())
    }
}

fn host_error(err: octocrab::Error) -> HostError {
    match &err {
        octocrab::Error::GitHub { source, .. } => HostError::new(
            Some(source.status_code.as_u16()),
            source.message.clone(),
        ),
        other => HostError::new(None, other.to_string()),
    }
}

fn timeout_error() -> HostError {
    HostError::new(
        None,
        format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs()),
    )
}
