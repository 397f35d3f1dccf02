//! Gemfile mutation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

use super::inspector::GEMFILE;

/// Appends gem declarations to a host project's Gemfile.
///
/// This is the only manifest-mutating operation in the tool. Two
/// installs racing on the same Gemfile are unsupported.
#[derive(Debug)]
pub struct GemfileWriter {
    path: PathBuf,
}

impl GemfileWriter {
    /// Writer for the Gemfile at `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(GEMFILE),
        }
    }

    /// Append a `gem '<name>'` declaration, creating the file if needed.
    pub fn append_gem(&self, gem: &str) -> Result<()> {
        let needs_leading_newline = fs::read(&self.path)
            .map(|bytes| !bytes.is_empty() && bytes.last() != Some(&b'\n'))
            .unwrap_or(false);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_leading_newline {
            writeln!(file)?;
        }
        writeln!(file, "gem '{}'", gem)?;
        debug!("appended gem '{}' to {}", gem, self.path.display());
        Ok(())
    }
}
