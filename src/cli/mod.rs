//! Command-line surface

pub mod config;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// editstub - stand-in for an interactive text editor in tests
///
/// Every positional argument is collected as-is; the arity check belongs to
/// the editor core so it can report its own error.
#[derive(Parser, Debug)]
#[command(
    name = "editstub",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// The file being "edited"
    #[arg(value_name = "FILE", num_args = 0.., allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parses the process arguments.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::from_argv(std::env::args_os())
    }

    /// Parses `argv` (program name first) so that every later entry,
    /// including `--` and hyphen-leading words, lands in `files` verbatim.
    pub fn from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("editstub"));
        // A leading escape makes clap take everything after it as a value.
        let escaped = [program, OsString::from("--")].into_iter().chain(argv);
        Self::try_parse_from(escaped)
    }
}
