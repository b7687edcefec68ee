//! Trigger-context assembly from the GitHub Actions environment.

use std::path::Path;

use herald_core::{EventKind, HeraldError, TriggerContext};

/// Build the trigger context from the standard Actions environment.
///
/// Reads `GITHUB_EVENT_NAME`, `GITHUB_REPOSITORY`, `GITHUB_REF`,
/// `GITHUB_WORKFLOW`, and `GITHUB_JOB`. For pull request runs the head
/// branch comes from the event payload file at `GITHUB_EVENT_PATH`, since
/// the run ref is the synthetic merge ref.
///
/// # Errors
///
/// Returns [`HeraldError::Config`] when the event name or repository
/// coordinates are missing or malformed, [`HeraldError::Payload`] when the
/// payload file cannot be read or parsed.
pub fn from_env() -> Result<TriggerContext, HeraldError> {
    let event_name = require_var("GITHUB_EVENT_NAME")?;
    let repository = require_var("GITHUB_REPOSITORY")?;
    let (owner, repo) = repository.split_once('/').ok_or_else(|| {
        HeraldError::Config(format!(
            "invalid GITHUB_REPOSITORY '{repository}', expected owner/repo"
        ))
    })?;

    let event = EventKind::from_event_name(&event_name);
    let pr_head_ref = if event == EventKind::PullRequest {
        match std::env::var("GITHUB_EVENT_PATH") {
            Ok(path) => head_ref_from_payload(Path::new(&path))?,
            Err(_) => None,
        }
    } else {
        None
    };

    Ok(TriggerContext {
        event,
        owner: owner.to_string(),
        repo: repo.to_string(),
        git_ref: std::env::var("GITHUB_REF").unwrap_or_default(),
        pr_head_ref,
        workflow: std::env::var("GITHUB_WORKFLOW").unwrap_or_default(),
        job: std::env::var("GITHUB_JOB").ok().filter(|j| !j.is_empty()),
    })
}

fn require_var(name: &str) -> Result<String, HeraldError> {
    std::env::var(name)
        .map_err(|_| HeraldError::Config(format!("{name} not set; is this a GitHub Actions run?")))
}

/// Extract `pull_request.head.ref` from an event payload file.
pub fn head_ref_from_payload(path: &Path) -> Result<Option<String>, HeraldError> {
    let content = std::fs::read_to_string(path)?;
    let payload: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| HeraldError::Payload(format!("invalid event payload JSON: {e}")))?;
    Ok(payload
        .pointer("/pull_request/head/ref")
        .and_then(|v| v.as_str())
        .map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn head_ref_extracted_from_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pull_request": {{"head": {{"ref": "test-branch"}}}}}}"#
        )
        .unwrap();

        let head_ref = head_ref_from_payload(file.path()).unwrap();
        assert_eq!(head_ref.as_deref(), Some("test-branch"));
    }

    #[test]
    fn payload_without_pull_request_yields_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ref": "refs/heads/main"}}"#).unwrap();

        let head_ref = head_ref_from_payload(file.path()).unwrap();
        assert_eq!(head_ref, None);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = head_ref_from_payload(file.path());
        assert!(matches!(result, Err(HeraldError::Payload(_))));
    }
}
