pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::BuildConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "build-lists")]
#[command(about = "Generate VPN routing lists (ControlD, MikroTik, UniFi/VyOS) from the domain source")]
pub struct CliConfig {
    /// Optional TOML file overriding list, source and output settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the source and output paths are relative to
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Override the source file path
    #[arg(long)]
    pub source: Option<String>,

    /// Parse and summarise without writing any output
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 配置與命令列覆蓋設定
    pub fn resolve(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                BuildConfig::from_file(path)?
            }
            None => BuildConfig::default(),
        };

        if let Some(source) = &self.source {
            tracing::info!("🔧 Source overridden to: {}", source);
            config.source.path = source.clone();
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_fixed_paths() {
        let cli = CliConfig::parse_from(["build-lists"]);
        assert_eq!(cli.root, ".");
        assert!(!cli.dry_run);

        let config = cli.resolve().unwrap();
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn test_source_override() {
        let cli = CliConfig::parse_from(["build-lists", "--source", "alt/list.txt", "--dry-run"]);
        assert!(cli.dry_run);
        assert_eq!(cli.resolve().unwrap().source.path, "alt/list.txt");
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::parse_from(["build-lists", "--config", "/nonexistent/lists.toml"]);
        assert!(cli.resolve().is_err());
    }
}
