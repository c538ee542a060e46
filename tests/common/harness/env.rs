//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::StubCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding a capture path, an injection file and a
/// target document, cleaned up on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the stub should write the captured content.
    pub fn capture_path(&self) -> PathBuf {
        self.root.join("cap")
    }

    /// Where the stub reads the injected content from.
    pub fn injection_path(&self) -> PathBuf {
        self.root.join("inj")
    }

    /// The document being "edited".
    pub fn target_path(&self) -> PathBuf {
        self.root.join("doc")
    }

    /// Writes the target document.
    pub fn target(&self, content: &str) -> PathBuf {
        self.write_file("doc", content)
    }

    /// Writes the injection file.
    pub fn inject(&self, content: &str) -> PathBuf {
        self.write_file("inj", content)
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file as UTF-8, or `None` if it doesn't exist.
    pub fn read(&self, path: &Path) -> Option<String> {
        path.exists()
            .then(|| std::fs::read_to_string(path).expect("Failed to read file"))
    }

    /// A command with both variables pointing into this environment.
    pub fn cmd(&self) -> StubCommand {
        StubCommand::new()
            .input(&self.capture_path())
            .output(&self.injection_path())
    }

    /// The usual invocation: both variables set, target as sole argument.
    pub fn edit(&self) -> StubCommand {
        self.cmd().arg(self.target_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_paths_are_inside_root() {
        let env = TestEnv::new();
        assert!(env.capture_path().starts_with(env.root()));
        assert!(env.injection_path().starts_with(env.root()));
        assert!(env.target_path().starts_with(env.root()));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.target("x");
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_read_missing_is_none() {
        let env = TestEnv::new();
        assert_eq!(env.read(&env.capture_path()), None);
    }
}
