//! Shared types, error model, and configuration for vitae.
//!
//! This crate is the foundation depended on by all other vitae crates.
//! It provides:
//! - [`VitaeError`]: the unified error type
//! - Record and domain types ([`Record`], [`Event`], [`Project`],
//!   [`TeachingEntry`], [`Publication`], [`SiteContent`])
//! - Configuration ([`AppConfig`], [`BuildConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, BuildConfig, CONFIG_FILE_NAME, OUTPUT_FILE_NAME, PathsConfig, load_config,
    load_config_from,
};
pub use error::{Result, VitaeError};
pub use types::{
    Event, ISO_8601_SUFFIX, Project, ProjectRole, ProjectSource, Publication, PublicationType,
    Record, SiteContent, TeachingEntry,
};
