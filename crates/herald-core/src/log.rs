/// Sink for user-facing run diagnostics.
///
/// The notification pipeline reports progress and failure guidance through
/// this trait; it never consumes a return value. The binary installs
/// [`ActionsLogger`]; tests install a recording implementation.
pub trait Logger {
    /// Informational progress message.
    fn info(&self, message: &str);
    /// Non-fatal condition the operator should see.
    fn warning(&self, message: &str);
    /// Fatal-path diagnostic.
    fn error(&self, message: &str);
}

/// Logger that emits GitHub Actions workflow commands.
///
/// `::warning::` and `::error::` lines surface as annotations on the run;
/// info messages are plain log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionsLogger;

impl Logger for ActionsLogger {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warning(&self, message: &str) {
        println!("::warning::{message}");
    }

    fn error(&self, message: &str) {
        println!("::error::{message}");
    }
}
