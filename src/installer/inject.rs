//! Idempotent text injection into host-project source files.
//!
//! Installs can run more than once, so every injection checks for its
//! own output first and becomes a no-op when the text is already there.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Insert `snippet` immediately after the first line containing `anchor`.
///
/// Returns whether a write happened. A file already containing the
/// snippet is left untouched; a file without the anchor is an error.
pub fn inject_after(path: &Path, anchor: &str, snippet: &str) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let snippet = snippet.trim_end();
    if content.contains(snippet) {
        debug!("{} already contains the snippet, skipping", path.display());
        return Ok(false);
    }

    let position = content
        .lines()
        .position(|line| line.contains(anchor))
        .ok_or_else(|| anyhow::anyhow!("no line matching '{}' in {}", anchor, path.display()))?;

    let mut rebuilt: Vec<String> = Vec::new();
    for (index, line) in content.lines().enumerate() {
        rebuilt.push(line.to_string());
        if index == position {
            rebuilt.push(snippet.to_string());
        }
    }

    fs::write(path, rebuilt.join("\n") + "\n")?;
    Ok(true)
}

/// Insert `line` just before the final `end` of a Ruby block file,
/// unless the file already contains it.
///
/// Used for route declarations, which in a Rails routes file must land
/// inside the `draw do ... end` block.
pub fn insert_before_final_end(path: &Path, line: &str) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    if content.lines().any(|existing| existing.trim() == line.trim()) {
        debug!("{} already contains '{}', skipping", path.display(), line.trim());
        return Ok(false);
    }

    let position = content
        .lines()
        .collect::<Vec<_>>()
        .iter()
        .rposition(|existing| existing.trim() == "end")
        .ok_or_else(|| anyhow::anyhow!("no closing 'end' in {}", path.display()))?;

    let mut rebuilt: Vec<String> = Vec::new();
    for (index, existing) in content.lines().enumerate() {
        if index == position {
            rebuilt.push(line.to_string());
        }
        rebuilt.push(existing.to_string());
    }

    fs::write(path, rebuilt.join("\n") + "\n")?;
    Ok(true)
}
