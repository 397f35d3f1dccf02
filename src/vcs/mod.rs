//! Version control detection and working-tree cleanliness.
//!
//! The installer writes many files into a host project in one pass.
//! The only practical undo is the project's own VCS, so the preflight
//! refuses to run against a dirty tree. Detection is a marker-directory
//! check; cleanliness shells out to the VCS's status command.

pub mod cleanliness;
pub mod detect;

pub use cleanliness::{is_clean, status_text};
pub use detect::{detect, VcsKind};
