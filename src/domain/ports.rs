use crate::domain::model::{ListInfo, OutputTargets};
use crate::utils::error::Result;

/// File access for the build, paths are relative to the storage root.
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_to_string(&self, path: &str) -> Result<String>;
    /// Writes `data`, creating missing parent directories first.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &str;
    fn list_info(&self) -> &ListInfo;
    fn outputs(&self) -> &OutputTargets;
}

/// One target platform's syntax.
pub trait ListFormat {
    /// Human-readable platform name, used in logs and reports.
    fn name(&self) -> &str;
    /// Value of the `Syntax:` header line.
    fn syntax(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Platform-specific usage comment block, written after the header.
    fn usage(&self) -> String;
    /// Written once before the first entry.
    fn preamble(&self) -> &str {
        ""
    }
    fn format_entry(&self, domain: &str) -> String;
    /// Written once after the last entry.
    fn trailer(&self) -> &str {
        ""
    }
}
