//! The editor stub: capture the target, then inject the canned result.

use crate::cli::config::Config;
use crate::error::{CopyStep, StubError};
use crate::infra::copy_contents;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Outcome of a successful edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub target: PathBuf,
    pub captured_bytes: u64,
    pub injected_bytes: u64,
}

/// Resolves configuration through `lookup`, then edits.
///
/// Configuration errors win over argument errors.
pub fn run<F>(args: &[PathBuf], lookup: F) -> Result<Edit, StubError>
where
    F: FnMut(&str) -> Option<OsString>,
{
    let config = Config::from_lookup(lookup)?;
    log::debug!(
        "configured: input={} output={}",
        config.input.display(),
        config.output.display()
    );
    edit(args, &config)
}

/// Copies the target into the capture path, then the injection file over the
/// target.
///
/// `args` must hold exactly one path. Nothing is touched unless that holds. A
/// failed injection leaves the capture in place.
pub fn edit(args: &[PathBuf], config: &Config) -> Result<Edit, StubError> {
    let [target] = args else {
        return Err(StubError::InvalidArguments { count: args.len() });
    };

    let captured_bytes = copy(CopyStep::Capture, target, &config.input)?;
    let injected_bytes = copy(CopyStep::Inject, &config.output, target)?;

    Ok(Edit {
        target: target.clone(),
        captured_bytes,
        injected_bytes,
    })
}

fn copy(step: CopyStep, from: &Path, to: &Path) -> Result<u64, StubError> {
    log::debug!("{step}: {} -> {}", from.display(), to.display());
    copy_contents(from, to).map_err(|source| StubError::Io {
        step,
        from: from.into(),
        to: to.into(),
        source,
    })
}
