use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

/// Diagnostic logging setup. Log lines always go to stderr so they never mix
/// with the conversation on stdout.
#[derive(Default)]
pub struct Logging {
    verbose: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable debug-level logging of menu selections and math state changes.
    ///
    /// Parameters:
    ///   - enable: true to log at debug level
    ///
    /// Returns: Self for chaining
    #[must_use]
    pub fn with_verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }

    fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    pub fn start(&self) -> Result<()> {
        env_logger::builder()
            .filter_level(self.level())
            .target(Target::Stderr)
            .try_init()
            .context("Unable to initialize logging")
    }
}
