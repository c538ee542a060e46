//! Diagnostic logging to stderr, off unless `EDITSTUB_LOG` is set.

use env_logger::{Builder, Env};

/// Variable holding the log filter, in `env_logger` syntax.
pub const LOG_VAR: &str = "EDITSTUB_LOG";

/// Installs the global logger. Safe to call more than once.
pub fn init() {
    let env = Env::new().filter_or(LOG_VAR, "off");
    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
