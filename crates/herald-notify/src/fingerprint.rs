use herald_core::ScanConfig;

/// Title line of the posted comment, and the first fingerprint marker.
pub const COMMENT_TITLE: &str = "Artifact Scan Report";

/// Substring sets that identify a previously posted comment for one scan
/// configuration.
///
/// There is no durable comment id and no hidden metadata tag: a comment is
/// "ours, for this configuration" iff its body contains every required
/// substring and none of the forbidden ones. Required substrings are the
/// report title, the artifact marker, and one section token per enabled
/// scanner; forbidden substrings are the tokens of disabled scanners, so two
/// runs with different scanner sets keep separate comments.
///
/// # Examples
///
/// ```
/// use herald_core::ScanConfig;
/// use herald_notify::fingerprint::CommentFingerprint;
///
/// let scan = ScanConfig {
///     artifact: "container:latest".into(),
///     vulnerabilities: true,
///     malware: false,
///     secrets: false,
/// };
/// let fp = CommentFingerprint::for_scan(&scan);
/// assert!(fp.matches("# Artifact Scan Report\nartifact `container:latest`\nVulnerabilities: none"));
/// assert!(!fp.matches("some unrelated user comment"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFingerprint {
    required: Vec<String>,
    forbidden: Vec<String>,
}

impl CommentFingerprint {
    /// Derive the fingerprint for a scan configuration.
    pub fn for_scan(scan: &ScanConfig) -> Self {
        let mut required = vec![
            COMMENT_TITLE.to_string(),
            format!("artifact `{}`", scan.artifact),
        ];
        let mut forbidden = Vec::new();

        for scanner in scan.enabled() {
            required.push(scanner.token().to_string());
        }
        for scanner in scan.disabled() {
            forbidden.push(scanner.token().to_string());
        }

        Self { required, forbidden }
    }

    /// Whether a comment body belongs to this configuration.
    pub fn matches(&self, body: &str) -> bool {
        self.required.iter().all(|s| body.contains(s.as_str()))
            && self.forbidden.iter().all(|s| !body.contains(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(vulnerabilities: bool, malware: bool, secrets: bool) -> ScanConfig {
        ScanConfig {
            artifact: "container:latest".into(),
            vulnerabilities,
            malware,
            secrets,
        }
    }

    fn body(artifact: &str, sections: &[&str]) -> String {
        let mut body = format!("# {COMMENT_TITLE}\nScan Results for artifact `{artifact}`\n");
        for section in sections {
            body.push_str(&format!("## {section}\nNo findings.\n"));
        }
        body
    }

    #[test]
    fn matches_comment_with_all_scanners() {
        let fp = CommentFingerprint::for_scan(&scan(true, true, true));
        let body = body("container:latest", &["Vulnerabilities", "Malware", "Secrets"]);
        assert!(fp.matches(&body));
    }

    #[test]
    fn rejects_plain_user_comment() {
        let fp = CommentFingerprint::for_scan(&scan(true, true, true));
        assert!(!fp.matches("User comment"));
    }

    #[test]
    fn rejects_comment_for_different_artifact() {
        let fp = CommentFingerprint::for_scan(&scan(true, true, true));
        let body = body("other:tag", &["Vulnerabilities", "Malware", "Secrets"]);
        assert!(!fp.matches(&body));
    }

    #[test]
    fn rejects_comment_containing_disabled_scanner_section() {
        // A previous run with malware enabled left its section behind; that
        // comment belongs to a different configuration.
        let fp = CommentFingerprint::for_scan(&scan(true, false, true));
        let body = body("container:latest", &["Vulnerabilities", "Malware", "Secrets"]);
        assert!(!fp.matches(&body));
    }

    #[test]
    fn rejects_comment_missing_enabled_scanner_section() {
        let fp = CommentFingerprint::for_scan(&scan(true, true, true));
        let body = body("container:latest", &["Vulnerabilities"]);
        assert!(!fp.matches(&body));
    }

    #[test]
    fn matches_configuration_with_no_scanners() {
        let fp = CommentFingerprint::for_scan(&scan(false, false, false));
        let body = body("container:latest", &[]);
        assert!(fp.matches(&body));
    }
}
