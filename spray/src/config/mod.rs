//! Configuration system for spray.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `spray.yaml` files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SPRAY_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Private project config (`spray.local.yaml`)
//! 5. Project config (`spray.yaml`)
//! 6. User config (`~/.spray/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use spray::config::{Config, ConfigBuilder};
//! use spray::IndexerOptions;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         separator: Some("-".to_string()),
//!         force_index: Some(true),
//!         index_prefix: Some(":".to_string()),
//!         index_suffix: Some(String::new()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let options = IndexerOptions::from_config(&config).unwrap();
//! assert_eq!(options.format_segment("div", 0), "div:0");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod options;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use options::IndexerOptions;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
