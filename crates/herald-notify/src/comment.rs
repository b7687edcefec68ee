use herald_core::{ExistingComment, HeraldError, Logger, PullRequestRef, ScanConfig};

use crate::fingerprint::{CommentFingerprint, COMMENT_TITLE};
use crate::host::HostApi;

/// Badge rendered in front of the comment title.
pub const COMMENT_LOGO: &str = "\u{1f6e1}\u{fe0f}";

/// Comments are fetched in pages of this size until a short page.
const PER_PAGE: u8 = 100;

/// Assemble the comment body for a scan report.
///
/// The header names the artifact so the fingerprint can recognize the comment
/// later. The report generator's truncation notice points at its machine
/// readable "JSON output"; that location does not exist in a pull request
/// comment, so the first occurrence of the phrase is redirected to this run's
/// human-readable action logs.
///
/// # Examples
///
/// ```
/// use herald_core::ScanConfig;
/// use herald_notify::comment::build_comment_body;
///
/// let scan = ScanConfig {
///     artifact: "container:latest".into(),
///     vulnerabilities: true,
///     malware: false,
///     secrets: false,
/// };
/// let body = build_comment_body("full list in JSON output\n", &scan, "Scan artifact", None);
/// assert!(body.contains("artifact `container:latest`"));
/// assert!(body.contains("the \"Scan artifact\" action logs"));
/// ```
pub fn build_comment_body(
    report: &str,
    scan: &ScanConfig,
    workflow: &str,
    job: Option<&str>,
) -> String {
    let header = format!(
        "# {COMMENT_LOGO} {COMMENT_TITLE}\nScan Results for artifact `{}`\n",
        scan.artifact
    );
    let body = format!("{header}{report}");

    let location = match job {
        Some(job) => format!("\"{workflow} / {job}\""),
        None => format!("\"{workflow}\""),
    };
    body.replacen("JSON output", &format!("the {location} action logs"), 1)
}

/// Find the comment previously posted by this tool for the current scan
/// configuration, if any.
///
/// Fetches every comment on the pull request (all pages, in ascending page
/// order) and returns the first one matching the fingerprint, in retrieval
/// order.
///
/// # Errors
///
/// Returns [`HeraldError::CommentQuery`] if a page fetch fails.
pub async fn find_previous_comment<H: HostApi>(
    host: &H,
    owner: &str,
    repo: &str,
    pr: PullRequestRef,
    scan: &ScanConfig,
    logger: &dyn Logger,
) -> Result<Option<ExistingComment>, HeraldError> {
    let fingerprint = CommentFingerprint::for_scan(scan);

    let mut comments = Vec::new();
    let mut page: u32 = 1;
    loop {
        let batch = host
            .list_comments(owner, repo, pr.number, page, PER_PAGE)
            .await
            .map_err(|source| HeraldError::CommentQuery {
                number: pr.number,
                source,
            })?;
        let last_page = batch.len() < PER_PAGE as usize;
        comments.extend(batch);
        if last_page {
            break;
        }
        page += 1;
    }

    let matching = comments.into_iter().find(|c| fingerprint.matches(&c.body));
    match &matching {
        Some(comment) => logger.info(&format!("Found previous comment: {}", comment.id)),
        None => logger.info("No previous comment found"),
    }
    Ok(matching)
}

/// Create the comment, or replace the body of the matched one.
///
/// # Errors
///
/// Returns [`HeraldError::CreateComment`] or [`HeraldError::UpdateComment`]
/// with the pull request number when the mutation fails.
pub async fn upsert_comment<H: HostApi>(
    host: &H,
    owner: &str,
    repo: &str,
    pr: PullRequestRef,
    existing: Option<ExistingComment>,
    body: &str,
    logger: &dyn Logger,
) -> Result<(), HeraldError> {
    match existing {
        None => {
            logger.info("Creating new comment");
            host.create_comment(owner, repo, pr.number, body)
                .await
                .map_err(|source| HeraldError::CreateComment {
                    number: pr.number,
                    source,
                })?;
        }
        Some(comment) => {
            logger.info(&format!("Updating existing comment: {}", comment.id));
            host.update_comment(owner, repo, comment.id, body)
                .await
                .map_err(|source| HeraldError::UpdateComment {
                    number: pr.number,
                    source,
                })?;
        }
    }
    Ok(())
}
