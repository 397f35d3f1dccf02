//! The preflight gate sequence.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::manifest::ManifestInspector;
use crate::ui::UserInterface;
use crate::vcs;
use crate::version::SemanticVersion;

use super::freshness;

/// Oldest rails release the themes are built against.
pub const MINIMUM_RAILS: SemanticVersion = SemanticVersion::new(3, 1, 0);

/// Version of this installer binary.
pub const INSTALLER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of a preflight run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// All gates passed; installation may proceed.
    Proceed,
    /// A gate failed; the message tells the operator what to fix.
    Abort(String),
}

impl Verdict {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Verdict::Proceed)
    }
}

/// Sequences the preflight gates for one project.
///
/// Every gate is a read-only check recomputed from scratch, so an
/// aborted run leaves the project untouched and a second run on an
/// unchanged project reaches the same verdict. The first failing gate
/// ends the run; there are no retries.
pub struct Ensurer {
    project_root: PathBuf,
    config: Config,
    local_version: SemanticVersion,
}

impl Ensurer {
    /// Ensurer for `project_root` using this binary's own version.
    pub fn new(project_root: &Path, config: Config) -> Result<Self> {
        let local_version = INSTALLER_VERSION.parse()?;
        Ok(Self::with_version(project_root, config, local_version))
    }

    /// Ensurer with an explicit installer version.
    pub fn with_version(
        project_root: &Path,
        config: Config,
        local_version: SemanticVersion,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            local_version,
        }
    }

    /// Run all gates in order; the first abort wins.
    pub fn ensure_clean_install_possible(&self, ui: &mut dyn UserInterface) -> Result<Verdict> {
        debug!("running preflight for {}", self.project_root.display());

        let verdict = self.ensure_in_project_root()?;
        if !verdict.is_proceed() {
            return Ok(verdict);
        }
        let verdict = self.ensure_vcs_is_clean()?;
        if !verdict.is_proceed() {
            return Ok(verdict);
        }
        let verdict = self.ensure_rails_version_is_valid(ui)?;
        if !verdict.is_proceed() {
            return Ok(verdict);
        }
        self.ensure_installer_is_up_to_date()
    }

    /// Gate 1: the directory must look like a Rails application root.
    pub fn ensure_in_project_root(&self) -> Result<Verdict> {
        for marker in ["app", "config"] {
            if !self.project_root.join(marker).is_dir() {
                return Ok(Verdict::Abort(format!(
                    "{} does not look like the root of a Rails application (missing {}/). \
                     Change into your application's root directory and run the installer again.",
                    self.project_root.display(),
                    marker
                )));
            }
        }
        debug!("location gate passed");
        Ok(Verdict::Proceed)
    }

    /// Gate 2: refuse to write into a dirty working tree.
    ///
    /// The VCS is the operator's only undo for a bulk file write, so a
    /// dirty tree is fatal rather than a warning. No VCS at all skips
    /// the gate.
    pub fn ensure_vcs_is_clean(&self) -> Result<Verdict> {
        let Some(kind) = vcs::detect(&self.project_root) else {
            debug!("no VCS detected, cleanliness gate skipped");
            return Ok(Verdict::Proceed);
        };

        let status = vcs::status_text(kind, &self.project_root)?;
        if status.trim().is_empty() {
            debug!("{} working tree is clean", kind);
            return Ok(Verdict::Proceed);
        }

        Ok(Verdict::Abort(format!(
            "{} reports that you have the following changes:\n{}\n\
             Please roll back or commit the changes before installing, \
             so you have an easy way to revert if needed.",
            kind, status
        )))
    }

    /// Gate 3: old or unknown rails versions need an explicit go-ahead.
    pub fn ensure_rails_version_is_valid(&self, ui: &mut dyn UserInterface) -> Result<Verdict> {
        let inspector = ManifestInspector::new(&self.project_root);
        match inspector.rails_version()? {
            Some(version) if version >= MINIMUM_RAILS => {
                debug!("rails {} is supported", version);
                Ok(Verdict::Proceed)
            }
            Some(version) => {
                debug!("rails {} is below the minimum {}", version, MINIMUM_RAILS);
                self.ask_to_install_unsupported(ui)
            }
            None => {
                debug!("no resolved rails version found");
                self.ask_to_install_unsupported(ui)
            }
        }
    }

    /// Confirmation used when the rails version is unknown or too old.
    pub fn ask_to_install_unsupported(&self, ui: &mut dyn UserInterface) -> Result<Verdict> {
        ui.warning(&format!(
            "This installer supports Rails {} and newer, and we could not \
             verify that your application qualifies.",
            MINIMUM_RAILS
        ));
        if ui.confirm("Do you still wish to install the theme?")? {
            Ok(Verdict::Proceed)
        } else {
            Ok(Verdict::Abort("Halting.".to_string()))
        }
    }

    /// Gate 4: the server may require a newer installer.
    pub fn ensure_installer_is_up_to_date(&self) -> Result<Verdict> {
        let recommended = match freshness::fetch_recommended_version(&self.config.server_url) {
            Ok(version) => version,
            Err(e) => {
                debug!("version check failed: {}", e);
                return Ok(Verdict::Abort(
                    "There was an issue checking your installer version. \
                     Please try again, and contact support if the problem persists."
                        .to_string(),
                ));
            }
        };

        if self.local_version < recommended {
            return Ok(Verdict::Abort(format!(
                "Your version is older than the recommended version.\n\
                 Your version: {}\n\
                 Recommended version: {}\n\
                 Please upgrade the installer and run it again.",
                self.local_version, recommended
            )));
        }

        debug!(
            "installer {} is current (recommended {})",
            self.local_version, recommended
        );
        Ok(Verdict::Proceed)
    }
}
