//! Test harness for CLI integration tests.
//!
//! Provides an isolated scratch directory per test and a fluent wrapper
//! around `assert_cmd` for the `editstub` binary.

mod env;

#[allow(unused_imports)]
pub use command::StubCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
