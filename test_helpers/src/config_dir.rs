//! Scratch directories holding configuration files for loader tests.
//!
//! Each [`ConfigDir`] owns a fresh temporary directory that is removed when
//! the value is dropped, so tests never share files or touch the process
//! working directory.
//!
//! # Examples
//!
//! ```
//! use test_helpers::ConfigDir;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = ConfigDir::new()?;
//! let path = dir.write("config.json", r#"{"name": "demo"}"#)?;
//! assert!(path.is_file());
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory for configuration files.
#[derive(Debug)]
pub struct ConfigDir {
    dir: TempDir,
    root: Utf8PathBuf,
}

impl ConfigDir {
    /// Create an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary config directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temporary directory {} is not UTF-8", path.display()))?;
        Ok(Self { dir, root })
    }

    /// The directory itself.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` inside the directory and return the full
    /// path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.root.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Full path of `name` inside the directory, without creating it.
    #[must_use]
    pub fn join(&self, name: &str) -> Utf8PathBuf {
        debug_assert!(self.dir.path().exists(), "directory removed early");
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigDir;

    #[test]
    fn files_are_removed_with_the_directory() -> anyhow::Result<()> {
        let dir = ConfigDir::new()?;
        let path = dir.write("a.toml", "x = 1")?;
        anyhow::ensure!(std::fs::read_to_string(&path)? == "x = 1");
        let root = dir.path().to_owned();
        drop(dir);
        anyhow::ensure!(!root.exists());
        Ok(())
    }

    #[test]
    fn join_does_not_create_files() -> anyhow::Result<()> {
        let dir = ConfigDir::new()?;
        anyhow::ensure!(!dir.join("missing.json").exists());
        Ok(())
    }
}
