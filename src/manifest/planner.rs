//! Email gem planning.
//!
//! The HTML-email pipeline needs exactly one XML/HTML parser gem plus
//! `premailer-rails` to inline CSS into outgoing mail. The plan is the
//! minimal ordered list of gems to add: the parser is listed before the
//! gem that depends on it, so a line-by-line Gemfile write records the
//! prerequisite first.

use super::InstalledGems;

/// Gem that inlines CSS into outgoing HTML mail.
pub const PREMAILER_GEM: &str = "premailer-rails";

/// Parser gems that satisfy premailer's backend requirement.
pub const PARSER_GEMS: [&str; 2] = ["nokogiri", "hpricot"];

/// Parser added when the project has none.
pub const DEFAULT_PARSER_GEM: &str = "hpricot";

/// Every gem the email install flow may care about, for manifest scans.
pub const EMAIL_GEMS: [&str; 3] = [PREMAILER_GEM, "nokogiri", "hpricot"];

/// Compute the gems to add for a working email pipeline.
///
/// Evaluated top to bottom, first match wins:
/// - `premailer-rails` already installed: nothing to do
/// - a parser installed: add `premailer-rails` only
/// - neither: add the default parser, then `premailer-rails`
///
/// A gem already present is never proposed again.
pub fn plan_email_gems(installed: &InstalledGems) -> Vec<&'static str> {
    if installed.contains(PREMAILER_GEM) {
        return Vec::new();
    }
    if PARSER_GEMS.iter().any(|parser| installed.contains(parser)) {
        return vec![PREMAILER_GEM];
    }
    vec![DEFAULT_PARSER_GEM, PREMAILER_GEM]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_op_when_premailer_already_installed() {
        let installed = InstalledGems::from_names(&["premailer-rails", "hpricot"]);
        assert!(plan_email_gems(&installed).is_empty());
    }

    #[test]
    fn premailer_alone_suffices_to_stop() {
        let installed = InstalledGems::from_names(&["premailer-rails"]);
        assert!(plan_email_gems(&installed).is_empty());
    }

    #[test]
    fn nokogiri_present_adds_only_premailer() {
        let installed = InstalledGems::from_names(&["nokogiri"]);
        assert_eq!(plan_email_gems(&installed), vec!["premailer-rails"]);
    }

    #[test]
    fn hpricot_present_adds_only_premailer() {
        let installed = InstalledGems::from_names(&["hpricot"]);
        assert_eq!(plan_email_gems(&installed), vec!["premailer-rails"]);
    }

    #[test]
    fn bare_project_gets_parser_then_premailer() {
        let installed = InstalledGems::default();
        assert_eq!(
            plan_email_gems(&installed),
            vec!["hpricot", "premailer-rails"]
        );
    }

    #[test]
    fn plan_never_contains_an_installed_gem() {
        let cases = [
            InstalledGems::default(),
            InstalledGems::from_names(&["nokogiri"]),
            InstalledGems::from_names(&["hpricot"]),
            InstalledGems::from_names(&["premailer-rails"]),
            InstalledGems::from_names(&["premailer-rails", "nokogiri", "hpricot"]),
        ];
        for installed in cases {
            for gem in plan_email_gems(&installed) {
                assert!(!installed.contains(gem), "{gem} proposed twice");
            }
        }
    }
}
