//! Email (mailer) theme installation.
//!
//! Copies the email portion of an extracted theme into the host project,
//! wires up the preview controller and routes, and ensures the gems the
//! HTML-email pipeline needs are declared in the Gemfile. Every step is
//! idempotent so a re-run after a partial install is safe.

use include_dir::{include_dir, Dir};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::manifest::planner::EMAIL_GEMS;
use crate::manifest::{plan_email_gems, GemfileWriter, ManifestInspector};
use crate::ui::UserInterface;

use super::inject;

/// Mailer scaffolding shipped inside the installer binary.
static EMAIL_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/email");

/// Controller the mailer preview actions live in.
const CONTROLLER_PATH: &str = "app/controllers/canopy_controller.rb";

/// Routes exposed for previewing and sending the test email.
const EMAIL_ROUTES: [&str; 2] = [
    "  match 'canopy/email' => 'canopy#email'",
    "  match 'canopy/send_email' => 'canopy#send_email'",
];

/// Installs the email theme into a host project.
pub struct EmailInstaller {
    project_root: PathBuf,
}

impl EmailInstaller {
    /// Installer targeting `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Install the email theme from an extracted theme directory.
    pub fn install_from_file_system(
        &self,
        theme_dir: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let source = theme_dir.join("email");
        if source.is_dir() {
            ui.message("Installing email theme...");
            copy_tree(&source, &self.project_root)?;
        }

        self.add_controller_actions()?;
        self.add_routes()?;
        self.install_mail_gems_if_necessary()?;
        self.add_premailer_config_file()?;

        ui.success("Done installing email theme.");
        Ok(())
    }

    /// Add the preview/send actions to the canopy controller.
    ///
    /// The controller is created from the embedded template when the
    /// theme archive did not ship one; the action snippet is injected
    /// once, right after the class line.
    pub fn add_controller_actions(&self) -> Result<bool> {
        let controller = self.project_root.join(CONTROLLER_PATH);
        if !controller.exists() {
            if let Some(parent) = controller.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&controller, template_text("canopy_controller.rb")?)?;
            debug!("created {}", controller.display());
        }

        let snippet = template_text("email_actions.rb")?;
        inject::inject_after(&controller, "class CanopyController", &snippet)
    }

    /// Insert the email preview routes into `config/routes.rb`.
    pub fn add_routes(&self) -> Result<()> {
        let routes = self.project_root.join("config").join("routes.rb");
        for route in EMAIL_ROUTES {
            inject::insert_before_final_end(&routes, route)?;
        }
        Ok(())
    }

    /// Ensure the gems the email pipeline needs are declared.
    ///
    /// Returns the gems that were added, in the order they were written.
    pub fn install_mail_gems_if_necessary(&self) -> Result<Vec<&'static str>> {
        let inspector = ManifestInspector::new(&self.project_root);
        let installed = inspector.installed_gems(&EMAIL_GEMS)?;
        let plan = plan_email_gems(&installed);

        let writer = GemfileWriter::new(&self.project_root);
        for gem in &plan {
            writer.append_gem(gem)?;
        }
        Ok(plan)
    }

    /// Write the premailer initializer unless the project has one.
    pub fn add_premailer_config_file(&self) -> Result<()> {
        let target = self
            .project_root
            .join("config")
            .join("initializers")
            .join("premailer.rb");
        if target.exists() {
            debug!("{} already present, skipping", target.display());
            return Ok(());
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, template_text("premailer.rb")?)?;
        Ok(())
    }
}

/// Copy a directory tree into `dest_root`, creating directories as
/// needed and skipping dotfiles that crept into the theme archive.
fn copy_tree(source: &Path, dest_root: &Path) -> Result<()> {
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        let target = dest_root.join(&name);
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_tree(&entry.path(), &target)?;
        } else {
            debug!("cp {} -> {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Text of an embedded scaffolding file.
fn template_text(name: &str) -> Result<String> {
    let file = EMAIL_TEMPLATES
        .get_file(name)
        .ok_or_else(|| anyhow::anyhow!("missing embedded template {}", name))?;
    let text = file
        .contents_utf8()
        .ok_or_else(|| anyhow::anyhow!("embedded template {} is not UTF-8", name))?;
    Ok(text.to_string())
}
