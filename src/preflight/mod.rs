//! Preflight validation gates.
//!
//! Every mutating install runs behind
//! [`Ensurer::ensure_clean_install_possible`]: four read-only gates
//! evaluated in a fixed order, any of which can stop the run. Gates
//! report verdicts instead of exiting; the command layer owns process
//! termination.

pub mod ensurer;
pub mod freshness;

pub use ensurer::{Ensurer, Verdict, INSTALLER_VERSION, MINIMUM_RAILS};
pub use freshness::fetch_recommended_version;
