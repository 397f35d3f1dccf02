//! Gemfile and Gemfile.lock scanning.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CanopyError, Result};
use crate::version::SemanticVersion;

/// Dependency manifest file name in a host project root.
pub const GEMFILE: &str = "Gemfile";

/// Lock file recording resolved dependency versions.
pub const LOCKFILE: &str = "Gemfile.lock";

/// Gems from a watched set that are already declared or resolved.
///
/// Membership is case-insensitive; names are normalized on insert.
#[derive(Debug, Clone, Default)]
pub struct InstalledGems {
    present: BTreeSet<String>,
}

impl InstalledGems {
    /// Build a set from names known to be present.
    pub fn from_names(names: &[&str]) -> Self {
        let mut gems = Self::default();
        for name in names {
            gems.insert(name);
        }
        gems
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, gem: &str) -> bool {
        self.present.contains(&gem.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    fn insert(&mut self, gem: &str) {
        self.present.insert(gem.to_lowercase());
    }
}

/// Read-only view over a project's Gemfile and lock file.
///
/// The inspector never parses the manifest grammar. Presence is a
/// line-anchored token match, which is all the install flow needs: a gem
/// declared anywhere in the Gemfile or resolved anywhere in the lock
/// file counts as installed. Both files absent means everything absent.
#[derive(Debug, Clone)]
pub struct ManifestInspector {
    manifest_path: PathBuf,
    lock_path: PathBuf,
}

impl ManifestInspector {
    /// Inspector for the manifest files at `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            manifest_path: project_root.join(GEMFILE),
            lock_path: project_root.join(LOCKFILE),
        }
    }

    /// Whether `gem` appears as a token in the Gemfile or the lock file.
    ///
    /// The match is anchored so a name never matches a longer hyphenated
    /// gem: `nokogiri` does not match a `nokogiri-diff` line.
    pub fn contains(&self, gem: &str) -> Result<bool> {
        let pattern = token_pattern(gem);
        for path in [&self.manifest_path, &self.lock_path] {
            if let Some(content) = read_optional(path)? {
                if content.lines().any(|line| pattern.is_match(line)) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Subset of `gems` already present in either file.
    pub fn installed_gems(&self, gems: &[&str]) -> Result<InstalledGems> {
        let mut installed = InstalledGems::default();
        for gem in gems {
            if self.contains(gem)? {
                installed.insert(gem);
            }
        }
        Ok(installed)
    }

    /// The rails version pinned in the lock file, if rails is declared.
    ///
    /// `None` means no rails dependency was resolved (a fresh project, or
    /// no lock file at all). A rails spec line whose version does not
    /// parse is a hard error, not `None`.
    pub fn rails_version(&self) -> Result<Option<SemanticVersion>> {
        let Some(content) = read_optional(&self.lock_path)? else {
            return Ok(None);
        };

        let spec = Regex::new(r"^\s+rails \(([^)]+)\)").expect("static pattern");
        for line in content.lines() {
            if let Some(captures) = spec.captures(line) {
                return captures[1].parse().map(Some);
            }
        }
        Ok(None)
    }

    /// Whether the lock file exists (dependencies resolved at least once).
    pub fn lock_exists(&self) -> bool {
        self.lock_path.exists()
    }
}

/// Anchored token pattern for a gem name within a manifest line.
///
/// A gem token ends at anything that is not a word character or a
/// hyphen, so quoted Gemfile declarations and bare lock-file spec names
/// both match while hyphenated supersets do not.
fn token_pattern(gem: &str) -> Regex {
    Regex::new(&format!(r"(^|[^\w-]){}([^\w-]|$)", regex::escape(gem)))
        .expect("escaped gem name always forms a valid pattern")
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CanopyError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_gemfile(root: &Path, gems: &[&str]) {
        let mut content = String::from("source 'https://rubygems.org'\n");
        for gem in gems {
            content.push_str(&format!("gem '{}'\n", gem));
        }
        fs::write(root.join(GEMFILE), content).unwrap();
    }

    fn write_lockfile(root: &Path, specs: &[(&str, &str)]) {
        let mut content = String::from("GEM\n  remote: https://rubygems.org/\n  specs:\n");
        for (gem, version) in specs {
            content.push_str(&format!("    {} ({})\n", gem, version));
        }
        content.push_str("\nPLATFORMS\n  ruby\n");
        fs::write(root.join(LOCKFILE), content).unwrap();
    }

    #[test]
    fn finds_gem_declared_in_gemfile() {
        let temp = TempDir::new().unwrap();
        write_gemfile(temp.path(), &["nokogiri"]);

        let inspector = ManifestInspector::new(temp.path());
        assert!(inspector.contains("nokogiri").unwrap());
    }

    #[test]
    fn finds_gem_resolved_in_lock_only() {
        let temp = TempDir::new().unwrap();
        write_lockfile(temp.path(), &[("hpricot", "0.8.6")]);

        let inspector = ManifestInspector::new(temp.path());
        assert!(inspector.contains("hpricot").unwrap());
    }

    #[test]
    fn everything_absent_without_files() {
        let temp = TempDir::new().unwrap();

        let inspector = ManifestInspector::new(temp.path());
        assert!(!inspector.contains("nokogiri").unwrap());
        assert!(inspector.installed_gems(&["nokogiri", "hpricot"]).unwrap().is_empty());
    }

    #[test]
    fn hyphenated_superset_does_not_match() {
        let temp = TempDir::new().unwrap();
        write_gemfile(temp.path(), &["nokogiri-diff"]);

        let inspector = ManifestInspector::new(temp.path());
        assert!(!inspector.contains("nokogiri").unwrap());
        assert!(inspector.contains("nokogiri-diff").unwrap());
    }

    #[test]
    fn lock_spec_lines_match_as_tokens() {
        let temp = TempDir::new().unwrap();
        write_lockfile(
            temp.path(),
            &[("premailer-rails", "1.4.0"), ("nokogiri-diff", "0.2.0")],
        );

        let inspector = ManifestInspector::new(temp.path());
        assert!(inspector.contains("premailer-rails").unwrap());
        assert!(!inspector.contains("premailer").unwrap());
        assert!(!inspector.contains("nokogiri").unwrap());
    }

    #[test]
    fn installed_gems_collects_the_subset() {
        let temp = TempDir::new().unwrap();
        write_gemfile(temp.path(), &["nokogiri", "rake"]);

        let inspector = ManifestInspector::new(temp.path());
        let installed = inspector
            .installed_gems(&["nokogiri", "hpricot", "premailer-rails"])
            .unwrap();

        assert!(installed.contains("nokogiri"));
        assert!(!installed.contains("hpricot"));
        assert!(!installed.contains("premailer-rails"));
    }

    #[test]
    fn installed_gems_membership_is_case_insensitive() {
        let installed = InstalledGems::from_names(&["Nokogiri"]);
        assert!(installed.contains("nokogiri"));
        assert!(installed.contains("NOKOGIRI"));
    }

    #[test]
    fn rails_version_from_lock() {
        let temp = TempDir::new().unwrap();
        write_lockfile(
            temp.path(),
            &[("jquery-rails", "2.0.2"), ("rails", "3.2.8")],
        );

        let inspector = ManifestInspector::new(temp.path());
        assert_eq!(
            inspector.rails_version().unwrap(),
            Some(SemanticVersion::new(3, 2, 8))
        );
    }

    #[test]
    fn rails_version_none_when_rails_not_declared() {
        let temp = TempDir::new().unwrap();
        write_lockfile(temp.path(), &[("rake", "0.9.2")]);

        let inspector = ManifestInspector::new(temp.path());
        assert_eq!(inspector.rails_version().unwrap(), None);
    }

    #[test]
    fn rails_version_none_without_lock_file() {
        let temp = TempDir::new().unwrap();

        let inspector = ManifestInspector::new(temp.path());
        assert_eq!(inspector.rails_version().unwrap(), None);
        assert!(!inspector.lock_exists());
    }

    #[test]
    fn malformed_rails_version_is_a_hard_error() {
        let temp = TempDir::new().unwrap();
        write_lockfile(temp.path(), &[("rails", "edge")]);

        let inspector = ManifestInspector::new(temp.path());
        assert!(inspector.rails_version().is_err());
    }
}
