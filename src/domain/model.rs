use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata keys recognised in the comment header of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKey {
    Version,
    Description,
    Homepage,
    Expires,
}

impl MetadataKey {
    pub const ALL: [MetadataKey; 4] = [
        MetadataKey::Version,
        MetadataKey::Description,
        MetadataKey::Homepage,
        MetadataKey::Expires,
    ];

    /// Prefix as written in the source, colon included.
    pub fn prefix(self) -> &'static str {
        match self {
            MetadataKey::Version => "Version:",
            MetadataKey::Description => "Description:",
            MetadataKey::Homepage => "Homepage:",
            MetadataKey::Expires => "Expires:",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderMetadata {
    pub version: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub expires: Option<String>,
}

impl HeaderMetadata {
    pub fn set(&mut self, key: MetadataKey, value: String) {
        let slot = match key {
            MetadataKey::Version => &mut self.version,
            MetadataKey::Description => &mut self.description,
            MetadataKey::Homepage => &mut self.homepage,
            MetadataKey::Expires => &mut self.expires,
        };
        *slot = Some(value);
    }

    pub fn get(&self, key: MetadataKey) -> Option<&str> {
        match key {
            MetadataKey::Version => self.version.as_deref(),
            MetadataKey::Description => self.description.as_deref(),
            MetadataKey::Homepage => self.homepage.as_deref(),
            MetadataKey::Expires => self.expires.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        MetadataKey::ALL.iter().all(|key| self.get(*key).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceGroup {
    pub name: String,
    pub domains: Vec<String>,
}

/// Consecutive domains read while no service label was active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UngroupedRun {
    /// Number of service groups that existed when the run was read. The run
    /// is written just before the group at this index.
    pub before_group: usize,
    pub domains: Vec<String>,
}

/// Everything extracted from one pass over the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceDocument {
    /// Every accepted domain, in encounter order, duplicates kept.
    pub domains: Vec<String>,
    /// Service groups in first-seen order.
    pub services: Vec<ServiceGroup>,
    /// Unlabelled domains, split by the group position they were read at.
    pub ungrouped: Vec<UngroupedRun>,
    pub metadata: HeaderMetadata,
}

impl SourceDocument {
    pub fn push_domain(&mut self, domain: &str, service: Option<&str>) {
        self.domains.push(domain.to_string());

        let Some(name) = service else {
            let position = self.services.len();
            match self.ungrouped.last_mut() {
                Some(run) if run.before_group == position => run.domains.push(domain.to_string()),
                _ => self.ungrouped.push(UngroupedRun {
                    before_group: position,
                    domains: vec![domain.to_string()],
                }),
            }
            return;
        };

        match self.services.iter_mut().find(|group| group.name == name) {
            Some(group) => group.domains.push(domain.to_string()),
            None => self.services.push(ServiceGroup {
                name: name.to_string(),
                domains: vec![domain.to_string()],
            }),
        }
    }

    pub fn service(&self, name: &str) -> Option<&ServiceGroup> {
        self.services.iter().find(|group| group.name == name)
    }

    /// Unlabelled runs to write immediately before group `index`.
    pub fn ungrouped_before(&self, index: usize) -> impl Iterator<Item = &UngroupedRun> + '_ {
        self.ungrouped
            .iter()
            .filter(move |run| run.before_group == index)
    }

    pub fn ungrouped_domains(&self) -> impl Iterator<Item = &str> + '_ {
        self.ungrouped
            .iter()
            .flat_map(|run| run.domains.iter().map(String::as_str))
    }

    pub fn ungrouped_count(&self) -> usize {
        self.ungrouped.iter().map(|run| run.domains.len()).sum()
    }

    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    pub fn grouped_count(&self) -> usize {
        self.services.iter().map(|group| group.domains.len()).sum()
    }

    pub fn entry_count(&self) -> usize {
        self.domains.len()
    }
}

pub const DEFAULT_HOMEPAGE: &str = "https://github.com/the-Jamz/dns-censored";

/// Static text printed in every generated header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListInfo {
    pub title: String,
    pub description: String,
    pub homepage: String,
    /// Defaults to `<homepage>/blob/main/LICENSE`.
    pub license: Option<String>,
    /// Defaults to `<homepage>/issues`.
    pub issues: Option<String>,
    /// Used when the source carries no `Expires:` line.
    pub default_expires: String,
}

impl Default for ListInfo {
    fn default() -> Self {
        Self {
            title: "UK-Blocking Hosts - VPN Routing List".to_string(),
            description: "Routes UK-blocked domains through VPN".to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            license: None,
            issues: None,
            default_expires: "7 days".to_string(),
        }
    }
}

impl ListInfo {
    pub fn license_url(&self) -> String {
        self.license
            .clone()
            .unwrap_or_else(|| format!("{}/blob/main/LICENSE", self.homepage_base()))
    }

    pub fn issues_url(&self) -> String {
        self.issues
            .clone()
            .unwrap_or_else(|| format!("{}/issues", self.homepage_base()))
    }

    fn homepage_base(&self) -> &str {
        self.homepage.trim_end_matches('/')
    }
}

/// Where each format is written, relative to the storage root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputTargets {
    pub controld_path: String,
    pub mikrotik_path: String,
    pub mikrotik_list: String,
    pub unifi_path: String,
    pub unifi_group: String,
}

impl Default for OutputTargets {
    fn default() -> Self {
        Self {
            controld_path: "controld/uk-blocking-hosts.txt".to_string(),
            mikrotik_path: "mikrotik/uk-blocking-hosts.rsc".to_string(),
            mikrotik_list: "uk-blocked".to_string(),
            unifi_path: "unifi/uk-blocking-hosts.sh".to_string(),
            unifi_group: "UK_BLOCKED".to_string(),
        }
    }
}

/// One generated file, as reported back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub format: String,
    pub path: String,
    pub entries: usize,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub domains: usize,
    pub services: usize,
    pub files: Vec<GeneratedFile>,
}
