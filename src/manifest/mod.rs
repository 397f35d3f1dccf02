//! Host-project dependency manifest inspection and mutation.
//!
//! The manifest is the host app's `Gemfile` plus its `Gemfile.lock`.
//! Reading is line-oriented token matching, never a full parse of the
//! Gemfile grammar; writing is a plain append of `gem '...'` lines.

pub mod inspector;
pub mod planner;
pub mod writer;

pub use inspector::{InstalledGems, ManifestInspector};
pub use planner::plan_email_gems;
pub use writer::GemfileWriter;
