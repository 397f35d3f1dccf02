//! Marker-directory VCS classification.

use std::fmt;
use std::path::Path;

/// Version control systems recognized at a host project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    Git,
    Mercurial,
    Subversion,
}

impl VcsKind {
    /// Marker directory that identifies this VCS at a project root.
    pub fn marker(self) -> &'static str {
        match self {
            VcsKind::Git => ".git",
            VcsKind::Mercurial => ".hg",
            VcsKind::Subversion => ".svn",
        }
    }

    /// Status command used to decide working-tree cleanliness.
    pub fn status_command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            VcsKind::Git => ("git", &["status", "-s"]),
            VcsKind::Mercurial => ("hg", &["status"]),
            VcsKind::Subversion => ("svn", &["status"]),
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VcsKind::Git => "Git",
            VcsKind::Mercurial => "Mercurial",
            VcsKind::Subversion => "Subversion",
        };
        f.write_str(name)
    }
}

/// Detection order. A root carrying several markers resolves to the
/// first hit, so Git beats Mercurial beats Subversion deterministically.
const PRIORITY: [VcsKind; 3] = [VcsKind::Git, VcsKind::Mercurial, VcsKind::Subversion];

/// Classify which VCS manages `root`, if any.
///
/// Read-only: looks for marker directories directly under `root` and
/// never caches the answer.
pub fn detect(root: &Path) -> Option<VcsKind> {
    PRIORITY
        .into_iter()
        .find(|kind| root.join(kind.marker()).is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detects_git() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        assert_eq!(detect(temp.path()), Some(VcsKind::Git));
    }

    #[test]
    fn detects_mercurial() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".hg")).unwrap();

        assert_eq!(detect(temp.path()), Some(VcsKind::Mercurial));
    }

    #[test]
    fn detects_subversion() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".svn")).unwrap();

        assert_eq!(detect(temp.path()), Some(VcsKind::Subversion));
    }

    #[test]
    fn none_without_markers() {
        let temp = TempDir::new().unwrap();
        assert_eq!(detect(temp.path()), None);
    }

    #[test]
    fn git_wins_over_mercurial() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::create_dir(temp.path().join(".hg")).unwrap();

        assert_eq!(detect(temp.path()), Some(VcsKind::Git));
    }

    #[test]
    fn mercurial_wins_over_subversion() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".hg")).unwrap();
        fs::create_dir(temp.path().join(".svn")).unwrap();

        assert_eq!(detect(temp.path()), Some(VcsKind::Mercurial));
    }

    #[test]
    fn marker_must_be_a_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".git"), "gitdir: elsewhere").unwrap();

        // A `.git` file (worktree pointer) is not a repository root marker.
        assert_eq!(detect(temp.path()), None);
    }

    #[test]
    fn detection_is_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        assert_eq!(detect(temp.path()), detect(temp.path()));
    }

    #[test]
    fn display_names() {
        assert_eq!(VcsKind::Git.to_string(), "Git");
        assert_eq!(VcsKind::Mercurial.to_string(), "Mercurial");
        assert_eq!(VcsKind::Subversion.to_string(), "Subversion");
    }
}
