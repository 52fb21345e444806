pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("GIT_VERSION");

/// Human-facing application name shown in the banner and `--help`.
pub const APP_NAME: &str = "Ralph Wiggum Fun App";

/// Width of the `=` rules framing quotes and math answers.
pub const SEPARATOR_WIDTH: usize = 50;

/// Returns the `=` rule used to frame feature output.
#[must_use]
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
