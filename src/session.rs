//! Harness side of the stub: a temp capture/injection pair for one test.

use crate::cli::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A private capture file and injection file, removed on drop.
///
/// ```no_run
/// use editstub::EditSession;
/// use std::process::Command;
///
/// let session = EditSession::new()?;
/// session.inject("new title\n")?;
///
/// let mut cmd = Command::new("my-tool");
/// cmd.env("EDITOR", "editstub");
/// session.apply(&mut cmd);
/// cmd.status()?;
///
/// assert_eq!(session.captured_string()?.as_deref(), Some("old title\n"));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct EditSession {
    _dir: TempDir,
    config: Config,
}

impl EditSession {
    /// Creates a session in a fresh temp directory.
    ///
    /// The injection file starts out empty, so an editor run without a prior
    /// `inject` blanks the target.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("failed to create session directory")?;
        let config = Config {
            input: dir.path().join("input"),
            output: dir.path().join("output"),
        };
        std::fs::write(&config.output, b"").with_context(|| {
            format!("failed to create injection file: {}", config.output.display())
        })?;
        Ok(Self { _dir: dir, config })
    }

    /// The configuration the stub should see.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Capture path (`TEST_EDITOR_INPUT`).
    pub fn input_path(&self) -> &Path {
        &self.config.input
    }

    /// Injection path (`TEST_EDITOR_OUTPUT`).
    pub fn output_path(&self) -> &Path {
        &self.config.output
    }

    /// Sets the content the next edit installs into its target.
    pub fn inject(&self, content: impl AsRef<[u8]>) -> Result<()> {
        std::fs::write(&self.config.output, content).with_context(|| {
            format!(
                "failed to write injection file: {}",
                self.config.output.display()
            )
        })
    }

    /// What the most recent edit captured, or `None` if nothing ran yet.
    pub fn captured(&self) -> Result<Option<Vec<u8>>> {
        let path = &self.config.input;
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read(path)
            .map(Some)
            .with_context(|| format!("failed to read capture file: {}", path.display()))
    }

    /// Like [`captured`](Self::captured), decoded as UTF-8.
    pub fn captured_string(&self) -> Result<Option<String>> {
        self.captured()?
            .map(|bytes| String::from_utf8(bytes).context("captured content is not UTF-8"))
            .transpose()
    }

    /// Forgets the last capture so the next run can be told apart.
    pub fn clear_capture(&self) -> Result<()> {
        match std::fs::remove_file(&self.config.input) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e).with_context(|| {
                format!(
                    "failed to remove capture file: {}",
                    self.config.input.display()
                )
            }),
            _ => Ok(()),
        }
    }

    /// Variable assignments for a child process.
    pub fn envs(&self) -> impl Iterator<Item = (&'static str, PathBuf)> + '_ {
        self.config
            .vars()
            .into_iter()
            .map(|(name, path)| (name, path.clone()))
    }

    /// Exports both variables on `cmd`.
    pub fn apply<'c>(&self, cmd: &'c mut Command) -> &'c mut Command {
        cmd.envs(self.envs())
    }
}
