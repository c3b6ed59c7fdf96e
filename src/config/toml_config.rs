use crate::core::{ConfigProvider, ListInfo, OutputTargets};
use crate::utils::error::{BuildError, Result};
use crate::utils::validation::{
    validate_identifier, validate_non_empty_string, validate_path, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SOURCE_PATH: &str = "domains/uk-blocking-hosts.txt";

/// Build settings. Every section is optional; missing values fall back to the
/// published list's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub list: ListInfo,
    pub source: SourceConfig,
    pub outputs: OutputTargets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SOURCE_PATH.to_string(),
        }
    }
}

impl BuildConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BuildError::ConfigError {
            message: format!("Cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BuildError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LIST_HOMEPAGE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BuildError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("list.title", &self.list.title)?;
        validate_non_empty_string("list.description", &self.list.description)?;
        validate_non_empty_string("list.default_expires", &self.list.default_expires)?;
        validate_url("list.homepage", &self.list.homepage)?;
        validate_url("list.license", &self.list.license_url())?;
        validate_url("list.issues", &self.list.issues_url())?;

        validate_path("source.path", &self.source.path)?;

        validate_path("outputs.controld_path", &self.outputs.controld_path)?;
        validate_path("outputs.mikrotik_path", &self.outputs.mikrotik_path)?;
        validate_path("outputs.unifi_path", &self.outputs.unifi_path)?;
        validate_identifier("outputs.mikrotik_list", &self.outputs.mikrotik_list)?;
        validate_identifier("outputs.unifi_group", &self.outputs.unifi_group)?;

        Ok(())
    }
}

impl ConfigProvider for BuildConfig {
    fn source_path(&self) -> &str {
        &self.source.path
    }

    fn list_info(&self) -> &ListInfo {
        &self.list
    }

    fn outputs(&self) -> &OutputTargets {
        &self.outputs
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
