pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::BuildConfig};
pub use crate::core::{etl::BuildEngine, parser::SourceParser};
pub use utils::error::{BuildError, Result};
