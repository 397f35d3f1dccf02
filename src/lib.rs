//! Canopy - theme and mailer installer for Ruby on Rails projects.
//!
//! Canopy copies purchased theme assets and HTML-email scaffolding into
//! a host Rails application. Every mutating step runs behind a preflight
//! of four gates (project location, VCS cleanliness, rails version, and
//! installer freshness) so the tool never writes into a project it could
//! damage without an undo path.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Server endpoint configuration
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Theme and mailer installation steps
//! - [`manifest`] - Gemfile inspection, gem planning, and mutation
//! - [`preflight`] - The validation gates run before any install
//! - [`ui`] - Terminal output and confirmation prompts
//! - [`vcs`] - Version control detection and cleanliness checks
//! - [`version`] - Semantic version parsing and comparison
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use canopy::config::Config;
//! use canopy::preflight::{Ensurer, Verdict};
//! use canopy::ui::MockUI;
//!
//! let root = Path::new(".");
//! let ensurer = Ensurer::new(root, Config::default()).unwrap();
//! let mut ui = MockUI::new();
//! match ensurer.ensure_clean_install_possible(&mut ui).unwrap() {
//!     Verdict::Proceed => println!("ready to install"),
//!     Verdict::Abort(reason) => eprintln!("{}", reason),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod preflight;
pub mod ui;
pub mod vcs;
pub mod version;

pub use error::{CanopyError, Result};
