//! Theme installation command.

use std::path::Path;

use crate::cli::args::InstallArgs;
use crate::config::Config;
use crate::error::Result;
use crate::installer::EmailInstaller;
use crate::preflight::{Ensurer, Verdict};
use crate::ui::UserInterface;

/// Run the full preflight, then install the theme from a local
/// extracted archive. Nothing is written before every gate has passed.
pub fn run(project_root: &Path, args: &InstallArgs, ui: &mut dyn UserInterface) -> Result<u8> {
    if !args.source.is_dir() {
        ui.error(&format!(
            "Theme source {} is not a directory. Extract the theme archive first.",
            args.source.display()
        ));
        return Ok(1);
    }

    let config = Config::load(project_root)?;
    let ensurer = Ensurer::new(project_root, config)?;
    if let Verdict::Abort(reason) = ensurer.ensure_clean_install_possible(ui)? {
        ui.error(&reason);
        return Ok(1);
    }

    EmailInstaller::new(project_root).install_from_file_system(&args.source, ui)?;
    Ok(0)
}
