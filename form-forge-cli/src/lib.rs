//! # form-forge-cli
//!
//! CLI library for generating Lightning Web Component bundles from form
//! design files.
//!
//! This crate provides the core functionality for the `form-forge` CLI tool,
//! including design loading, bundle generation, and file output.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`design`] - JSON and TOML design file loading
//! - [`generator`] - Bundle generation using form-forge
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - File system watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod design;
pub mod error;
pub mod generator;
pub mod watcher;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use design::DesignLoader;
pub use error::{CliError, CliResult};
pub use generator::{BundleGenerator, GeneratedBundle};
pub use watcher::FileWatcher;
pub use writer::FileWriter;
