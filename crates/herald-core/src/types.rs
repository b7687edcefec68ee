/// How the current pipeline run was triggered.
///
/// Anything other than the three supported trigger events maps to
/// [`EventKind::Unsupported`], which makes the whole run a no-op.
///
/// # Examples
///
/// ```
/// use herald_core::EventKind;
///
/// assert_eq!(EventKind::from_event_name("push"), EventKind::Push);
/// assert_eq!(EventKind::from_event_name("issue_comment"), EventKind::Unsupported);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A commit was pushed to a branch.
    Push,
    /// A pull request was opened or synchronized.
    PullRequest,
    /// The workflow was started manually.
    WorkflowDispatch,
    /// Any other trigger; the run exits without touching the host API.
    Unsupported,
}

impl EventKind {
    /// Map a GitHub Actions event name to its kind.
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            "workflow_dispatch" => Self::WorkflowDispatch,
            _ => Self::Unsupported,
        }
    }
}

/// Immutable description of the workflow run driving this notification.
///
/// Constructed once per run, either from the Actions environment or directly
/// in tests.
///
/// # Examples
///
/// ```
/// use herald_core::{EventKind, TriggerContext};
///
/// let ctx = TriggerContext {
///     event: EventKind::Push,
///     owner: "octocat".into(),
///     repo: "hello-world".into(),
///     git_ref: "refs/heads/main".into(),
///     pr_head_ref: None,
///     workflow: "Scan artifact".into(),
///     job: None,
/// };
/// assert_eq!(ctx.head_identity().as_deref(), Some("octocat:main"));
/// ```
#[derive(Debug, Clone)]
pub struct TriggerContext {
    /// Trigger event kind.
    pub event: EventKind,
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// The fully-formed git ref the run was triggered for.
    pub git_ref: String,
    /// Head branch from the pull request event payload, when present.
    pub pr_head_ref: Option<String>,
    /// Workflow name.
    pub workflow: String,
    /// Job name, when known.
    pub job: Option<String>,
}

impl TriggerContext {
    /// Resolve the `owner:branch` head identity used to look up open pull
    /// requests for this run.
    ///
    /// Push and manual-dispatch runs derive the branch from the ref with a
    /// literal `refs/heads/` prefix stripped. Pull request runs take the head
    /// branch from the event payload instead, since their ref looks like
    /// `refs/pull/<n>/merge`. Returns `None` for unsupported events, or for a
    /// pull request event whose payload carried no head ref.
    pub fn head_identity(&self) -> Option<String> {
        let branch = match self.event {
            EventKind::Push | EventKind::WorkflowDispatch => self
                .git_ref
                .strip_prefix("refs/heads/")
                .unwrap_or(&self.git_ref),
            EventKind::PullRequest => self.pr_head_ref.as_deref()?,
            EventKind::Unsupported => return None,
        };
        Some(format!("{}:{branch}", self.owner))
    }
}

/// The three scanners whose findings can appear in a report.
///
/// Each scanner contributes a section-heading token to the comment body, and
/// that token doubles as the fingerprint marker for recognizing a previously
/// posted comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanner {
    Vulnerabilities,
    Malware,
    Secrets,
}

impl Scanner {
    /// All scanners, in the order their toggles are declared.
    pub const ALL: [Scanner; 3] = [Self::Vulnerabilities, Self::Malware, Self::Secrets];

    /// The section-heading token this scanner contributes to a report.
    pub fn token(self) -> &'static str {
        match self {
            Self::Vulnerabilities => "Vulnerabilities",
            Self::Malware => "Malware",
            Self::Secrets => "Secrets",
        }
    }
}

/// An open pull request matching the resolved branch head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestRef {
    /// Pull request number.
    pub number: u64,
}

/// Read-only view of a comment already present on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingComment {
    /// Host-side comment id.
    pub id: u64,
    /// Full comment body text.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(event: EventKind, git_ref: &str, pr_head_ref: Option<&str>) -> TriggerContext {
        TriggerContext {
            event,
            owner: "test-owner".into(),
            repo: "test-repo".into(),
            git_ref: git_ref.into(),
            pr_head_ref: pr_head_ref.map(String::from),
            workflow: "Scan artifact".into(),
            job: None,
        }
    }

    #[test]
    fn push_strips_heads_prefix() {
        let ctx = context(EventKind::Push, "refs/heads/test-branch", None);
        assert_eq!(ctx.head_identity().as_deref(), Some("test-owner:test-branch"));
    }

    #[test]
    fn workflow_dispatch_strips_heads_prefix() {
        let ctx = context(EventKind::WorkflowDispatch, "refs/heads/test-branch", None);
        assert_eq!(ctx.head_identity().as_deref(), Some("test-owner:test-branch"));
    }

    #[test]
    fn pull_request_uses_payload_head_ref() {
        // The run ref is the synthetic merge ref; the branch must come from
        // the payload instead.
        let ctx = context(EventKind::PullRequest, "refs/pull/47/merge", Some("test-branch"));
        assert_eq!(ctx.head_identity().as_deref(), Some("test-owner:test-branch"));
    }

    #[test]
    fn pull_request_without_head_ref_is_unresolvable() {
        let ctx = context(EventKind::PullRequest, "refs/pull/47/merge", None);
        assert_eq!(ctx.head_identity(), None);
    }

    #[test]
    fn unsupported_event_yields_none() {
        let ctx = context(EventKind::Unsupported, "refs/heads/test-branch", None);
        assert_eq!(ctx.head_identity(), None);
    }

    #[test]
    fn ref_without_heads_prefix_is_used_verbatim() {
        let ctx = context(EventKind::Push, "test-branch", None);
        assert_eq!(ctx.head_identity().as_deref(), Some("test-owner:test-branch"));
    }

    #[test]
    fn event_names_map_to_kinds() {
        assert_eq!(EventKind::from_event_name("push"), EventKind::Push);
        assert_eq!(EventKind::from_event_name("pull_request"), EventKind::PullRequest);
        assert_eq!(
            EventKind::from_event_name("workflow_dispatch"),
            EventKind::WorkflowDispatch
        );
        assert_eq!(EventKind::from_event_name("schedule"), EventKind::Unsupported);
    }

    #[test]
    fn scanner_tokens_are_section_headings() {
        let tokens: Vec<&str> = Scanner::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(tokens, vec!["Vulnerabilities", "Malware", "Secrets"]);
    }
}
