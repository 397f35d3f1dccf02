//! Working-tree cleanliness via VCS status commands.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{CanopyError, Result};

use super::VcsKind;

/// Raw status output for `kind` at `root`.
///
/// Captures stdout only. A non-zero exit code is not itself an error; a
/// status binary that cannot be spawned is a fatal configuration problem
/// and never reads as "clean".
pub fn status_text(kind: VcsKind, root: &Path) -> Result<String> {
    let (program, args) = kind.status_command();
    debug!("running {} {} in {}", program, args.join(" "), root.display());

    let output = Command::new(program)
        .args(args)
        .current_dir(root)
        .output()
        .map_err(|e| CanopyError::VcsUnavailable {
            command: format!("{} {}", program, args.join(" ")),
            message: e.to_string(),
        })?;

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Whether the working tree is clean. No detected VCS is trivially clean.
pub fn is_clean(kind: Option<VcsKind>, root: &Path) -> Result<bool> {
    match kind {
        None => Ok(true),
        Some(kind) => Ok(status_text(kind, root)?.trim().is_empty()),
    }
}
