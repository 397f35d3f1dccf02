//! Preflight-only command.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::preflight::{Ensurer, Verdict};
use crate::ui::UserInterface;

/// Run the preflight gates and report the verdict.
pub fn run(project_root: &Path, ui: &mut dyn UserInterface) -> Result<u8> {
    let config = Config::load(project_root)?;
    let ensurer = Ensurer::new(project_root, config)?;

    match ensurer.ensure_clean_install_possible(ui)? {
        Verdict::Proceed => {
            ui.success("All preflight checks passed. The project is ready for an install.");
            Ok(0)
        }
        Verdict::Abort(reason) => {
            ui.error(&reason);
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn reports_failure_outside_a_rails_root() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let code = run(temp.path(), &mut ui).unwrap();

        assert_eq!(code, 1);
        assert!(ui.has_error("does not look like the root"));
    }
}
