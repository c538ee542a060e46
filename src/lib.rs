//! editstub - a mock `$EDITOR` for tests
//!
//! Point a program's `$EDITOR` at the `editstub` binary, set
//! `TEST_EDITOR_INPUT` and `TEST_EDITOR_OUTPUT`, and every "edit" copies the
//! file into the input path and replaces it with the content of the output
//! path.

pub mod cli;
pub mod editor;
pub mod error;
pub mod infra;
pub mod logging;
pub mod session;

use anyhow::Result;

use cli::Cli;

pub use editor::{Edit, edit};
pub use error::{CopyStep, StubError};
pub use session::EditSession;

/// Main entry point for the binary.
///
/// Configuration is checked before the argument count, so a missing variable
/// is reported even when the invocation is also malformed.
pub fn run() -> Result<()> {
    logging::init();

    let cli = Cli::from_env()?;
    let outcome = editor::run(&cli.files, |var| std::env::var_os(var))?;
    log::debug!(
        "edited {}: captured {} bytes, injected {} bytes",
        outcome.target.display(),
        outcome.captured_bytes,
        outcome.injected_bytes
    );
    Ok(())
}
