use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};

use herald_core::{ActionsLogger, HeraldConfig, ScanConfig};
use herald_notify::{context, GitHubClient, NotifyPipeline};

#[derive(Parser)]
#[command(
    name = "herald",
    version,
    about = "Post artifact scan reports as pull request comments",
    long_about = "Herald is a CI step that posts the markdown report from an artifact scan\n\
                   as a comment on every open pull request for the current branch. Repeated\n\
                   runs update the previous comment in place instead of posting a new one.\n\n\
                   Repository coordinates and the trigger event are read from the standard\n\
                   GitHub Actions environment (GITHUB_REPOSITORY, GITHUB_EVENT_NAME, ...).\n\n\
                   Examples:\n  \
                     herald --report scan-report.md --artifact myimage:latest --vulnerabilities\n  \
                     HERALD_ARTIFACT=myimage:latest herald --report scan-report.md"
)]
struct Cli {
    /// Path to the markdown scan report produced by the scan step
    #[arg(long, env = "HERALD_REPORT")]
    report: Option<PathBuf>,

    /// Identifier of the scanned artifact (e.g. image:tag)
    #[arg(long, env = "HERALD_ARTIFACT")]
    artifact: Option<String>,

    /// The vulnerabilities scanner was enabled for this run
    #[arg(long, env = "HERALD_VULNERABILITIES")]
    vulnerabilities: bool,

    /// The malware scanner was enabled for this run
    #[arg(long, env = "HERALD_MALWARE")]
    malware: bool,

    /// The secrets scanner was enabled for this run
    #[arg(long, env = "HERALD_SECRETS")]
    secrets: bool,

    /// GitHub token used for API calls
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Path to configuration file (default: .herald.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HeraldConfig::from_file(path).into_diagnostic()?,
        None => {
            let default_path = std::path::Path::new(".herald.toml");
            if default_path.exists() {
                HeraldConfig::from_file(default_path).into_diagnostic()?
            } else {
                HeraldConfig::default()
            }
        }
    };

    let report = cli.report.or(config.report.file).ok_or_else(|| {
        miette::miette!("no report file given; pass --report or set report.file in .herald.toml")
    })?;
    let artifact = cli
        .artifact
        .ok_or_else(|| miette::miette!("no artifact identifier given; pass --artifact"))?;

    // CLI flags can enable a scanner on top of the config file defaults.
    let scan = ScanConfig {
        artifact,
        vulnerabilities: cli.vulnerabilities || config.scanners.vulnerabilities,
        malware: cli.malware || config.scanners.malware,
        secrets: cli.secrets || config.scanners.secrets,
    };

    let trigger = context::from_env().into_diagnostic()?;
    let client = GitHubClient::new(cli.github_token.as_deref()).into_diagnostic()?;
    let logger = ActionsLogger;

    NotifyPipeline::new(&client, &logger, &trigger, &scan)
        .run(&report)
        .await
        .into_diagnostic()
        .wrap_err("pull request notification failed")
}
