use crate::core::{HeaderMetadata, ListInfo};
use chrono::{DateTime, Utc};

const LAST_MODIFIED_FORMAT: &str = "%d %b %Y %H:%M UTC";
const VERSION_FORMAT: &str = "%Y.%m%d.%H%M.01";

/// Timestamp fields shared by every file produced in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStamp {
    pub last_modified: String,
    pub version: String,
}

impl GenerationStamp {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            last_modified: now.format(LAST_MODIFIED_FORMAT).to_string(),
            version: now.format(VERSION_FORMAT).to_string(),
        }
    }
}

/// Header comment block placed at the top of every generated file.
pub fn render_header(
    info: &ListInfo,
    metadata: &HeaderMetadata,
    stamp: &GenerationStamp,
    syntax: &str,
    entry_count: usize,
) -> String {
    let expires = metadata
        .expires
        .as_deref()
        .unwrap_or(info.default_expires.as_str());

    format!(
        "# Title: {title}\n\
         # Description: {description}\n\
         # Homepage: {homepage}\n\
         # License: {license}\n\
         # Issues: {issues}\n\
         # Expires: {expires}\n\
         # Last modified: {last_modified}\n\
         # Version: {version}\n\
         # Syntax: {syntax}\n\
         # Number of entries: {entry_count}\n\
         #\n\
         # Format inspired by HaGeZi's DNS Blocklists\n\
         # https://github.com/hagezi/dns-blocklists\n\
         #\n\
         \n",
        title = info.title,
        description = info.description,
        homepage = info.homepage,
        license = info.license_url(),
        issues = info.issues_url(),
        expires = expires,
        last_modified = stamp.last_modified,
        version = stamp.version,
        syntax = syntax,
        entry_count = entry_count,
    )
}
