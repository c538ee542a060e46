//! Configuration read from the environment.

use crate::error::StubError;
use std::ffi::OsString;
use std::path::PathBuf;

/// Variable naming the file that receives the target's pre-edit content.
pub const INPUT_VAR: &str = "TEST_EDITOR_INPUT";

/// Variable naming the file whose content replaces the target.
pub const OUTPUT_VAR: &str = "TEST_EDITOR_OUTPUT";

/// Paths the stub copies to and from, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capture path (`TEST_EDITOR_INPUT`)
    pub input: PathBuf,

    /// Injection path (`TEST_EDITOR_OUTPUT`)
    pub output: PathBuf,
}

impl Config {
    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `TEST_EDITOR_INPUT` is resolved first; if it is missing the lookup
    /// stops there and `TEST_EDITOR_OUTPUT` is never consulted. An empty
    /// value counts as missing.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, StubError>
    where
        F: FnMut(&str) -> Option<OsString>,
    {
        let input = require(&mut lookup, INPUT_VAR)?;
        let output = require(&mut lookup, OUTPUT_VAR)?;
        Ok(Self {
            input: input.into(),
            output: output.into(),
        })
    }

    /// The variable assignments that reproduce this configuration.
    pub fn vars(&self) -> [(&'static str, &PathBuf); 2] {
        [(INPUT_VAR, &self.input), (OUTPUT_VAR, &self.output)]
    }
}

fn require<F>(lookup: &mut F, var: &'static str) -> Result<OsString, StubError>
where
    F: FnMut(&str) -> Option<OsString>,
{
    lookup(var)
        .filter(|value| !value.is_empty())
        .ok_or(StubError::MissingConfiguration { var })
}
