//! The Herald notification pipeline.
//!
//! Resolves the branch a CI run was triggered from, finds its open pull
//! requests, and posts (or refreshes in place) a single scan-report summary
//! comment on each: trigger-context assembly, comment fingerprinting, body
//! assembly, the GitHub client, and the orchestrating pipeline.

pub mod comment;
pub mod context;
pub mod fingerprint;
pub mod github;
pub mod host;
pub mod pipeline;

pub use github::GitHubClient;
pub use pipeline::NotifyPipeline;
