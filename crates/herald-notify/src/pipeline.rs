use std::io::ErrorKind;
use std::path::Path;

use herald_core::{HeraldError, Logger, ScanConfig, TriggerContext};

use crate::comment::{build_comment_body, find_previous_comment, upsert_comment};
use crate::host::HostApi;

/// Diagnostic emitted when a host failure carries status 401, 403, or 404.
pub const UNAUTHORIZED_GUIDANCE: &str = "Unable to access repo resources and write comments, \
    please check that the GitHub token provided has the necessary permissions.";

/// Fallback instruction emitted on every fatal path before re-raising.
pub const FAILURE_INSTRUCTION: &str = "Scan results available in the action logs only.";

const NO_RESULTS_WARNING: &str =
    "No results available, please check that the scan completed successfully";

/// Orchestrates one notification run.
///
/// Reads the report, resolves the branch head for the trigger event, lists
/// the branch's open pull requests, and upserts the summary comment on each,
/// strictly in the order the host returned them. A missing or empty report,
/// an unsupported trigger event, and a branch with no open pull request all end
/// the run successfully; any host failure is diagnosed and re-raised so the
/// pipeline step is marked failed.
pub struct NotifyPipeline<'a, H, L> {
    host: &'a H,
    logger: &'a L,
    context: &'a TriggerContext,
    scan: &'a ScanConfig,
}

impl<'a, H: HostApi, L: Logger> NotifyPipeline<'a, H, L> {
    /// Create a pipeline over a host API and logger for one run.
    pub fn new(
        host: &'a H,
        logger: &'a L,
        context: &'a TriggerContext,
        scan: &'a ScanConfig,
    ) -> Self {
        Self {
            host,
            logger,
            context,
            scan,
        }
    }

    /// Run the notification end to end.
    ///
    /// # Errors
    ///
    /// Propagates host query and mutation failures (and non-NotFound report
    /// read failures) after logging operator guidance. A missing or empty
    /// report file is not an error.
    pub async fn run(&self, report_path: &Path) -> Result<(), HeraldError> {
        let report = match tokio::fs::read_to_string(report_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.logger.warning(NO_RESULTS_WARNING);
                return Ok(());
            }
            Err(err) => {
                self.logger.warning(FAILURE_INSTRUCTION);
                return Err(err.into());
            }
        };

        // An empty report means the scan produced nothing to post.
        if report.is_empty() {
            self.logger.warning(NO_RESULTS_WARNING);
            return Ok(());
        }

        match self.notify(&report).await {
            Ok(()) => Ok(()),
            Err(err) => {
                if err.is_authorization() {
                    self.logger.error(UNAUTHORIZED_GUIDANCE);
                }
                self.logger.warning(FAILURE_INSTRUCTION);
                Err(err)
            }
        }
    }

    async fn notify(&self, report: &str) -> Result<(), HeraldError> {
        let Some(head) = self.context.head_identity() else {
            self.logger
                .info("Unsupported trigger event, skipping pull request notification");
            return Ok(());
        };

        let pulls = self
            .host
            .list_pull_requests(&self.context.owner, &self.context.repo, &head)
            .await
            .map_err(HeraldError::PullRequestQuery)?;

        if pulls.is_empty() {
            self.logger.info(&format!(
                "No open pull request found for branch: {}. Scan results available in the action logs",
                self.context.git_ref
            ));
            return Ok(());
        }

        let numbers: Vec<String> = pulls.iter().map(|pr| pr.number.to_string()).collect();
        self.logger
            .info(&format!("Found open pull request(s): {}", numbers.join(", ")));

        let body = build_comment_body(
            report,
            self.scan,
            &self.context.workflow,
            self.context.job.as_deref(),
        );

        // Sequential by design: a failure on one PR aborts the rest.
        for pr in pulls {
            let existing = find_previous_comment(
                self.host,
                &self.context.owner,
                &self.context.repo,
                pr,
                self.scan,
                self.logger,
            )
            .await?;
            upsert_comment(
                self.host,
                &self.context.owner,
                &self.context.repo,
                pr,
                existing,
                &body,
                self.logger,
            )
            .await?;
        }
        Ok(())
    }
}
