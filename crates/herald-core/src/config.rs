use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HeraldError;
use crate::types::Scanner;

/// Top-level configuration loaded from `.herald.toml`.
///
/// Supports layered resolution: CLI flags > env vars > local config > defaults.
/// Everything a CI invocation passes on the command line can instead be
/// committed to the repository as defaults.
///
/// # Examples
///
/// ```
/// use herald_core::HeraldConfig;
///
/// let config = HeraldConfig::default();
/// assert!(config.report.file.is_none());
/// assert!(!config.scanners.vulnerabilities);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// Report location settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Default scanner-enablement toggles.
    #[serde(default)]
    pub scanners: ScannerToggles,
}

impl HeraldConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Io`] if the file cannot be read, or
    /// [`HeraldError::Toml`] if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use herald_core::HeraldConfig;
    /// use std::path::Path;
    ///
    /// let config = HeraldConfig::from_file(Path::new(".herald.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, HeraldError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use herald_core::HeraldConfig;
    ///
    /// let toml = r#"
    /// [report]
    /// file = "scan-report.md"
    /// "#;
    /// let config = HeraldConfig::from_toml(toml).unwrap();
    /// assert!(config.report.file.is_some());
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, HeraldError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Where to find the markdown report produced by the scan step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to the markdown report file.
    pub file: Option<PathBuf>,
}

/// Which scanners were enabled for the run.
///
/// These act as defaults; the CLI flags of the same names take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannerToggles {
    #[serde(default)]
    pub vulnerabilities: bool,
    #[serde(default)]
    pub malware: bool,
    #[serde(default)]
    pub secrets: bool,
}

/// Scanner enablement and artifact identity for the current run.
///
/// Immutable once assembled; the fingerprint and the comment header are both
/// derived from it.
///
/// # Examples
///
/// ```
/// use herald_core::{ScanConfig, Scanner};
///
/// let scan = ScanConfig {
///     artifact: "container:latest".into(),
///     vulnerabilities: true,
///     malware: false,
///     secrets: true,
/// };
/// assert_eq!(scan.enabled(), vec![Scanner::Vulnerabilities, Scanner::Secrets]);
/// assert_eq!(scan.disabled(), vec![Scanner::Malware]);
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Identifier of the scanned artifact (e.g. an image reference).
    pub artifact: String,
    pub vulnerabilities: bool,
    pub malware: bool,
    pub secrets: bool,
}

impl ScanConfig {
    /// Whether the given scanner was enabled for this run.
    pub fn is_enabled(&self, scanner: Scanner) -> bool {
        match scanner {
            Scanner::Vulnerabilities => self.vulnerabilities,
            Scanner::Malware => self.malware,
            Scanner::Secrets => self.secrets,
        }
    }

    /// Scanners enabled for this run, in declaration order.
    pub fn enabled(&self) -> Vec<Scanner> {
        Scanner::ALL
            .into_iter()
            .filter(|s| self.is_enabled(*s))
            .collect()
    }

    /// Scanners disabled for this run, in declaration order.
    pub fn disabled(&self) -> Vec<Scanner> {
        Scanner::ALL
            .into_iter()
            .filter(|s| !self.is_enabled(*s))
            .collect()
    }
}
