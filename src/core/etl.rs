use crate::app::formats::all_formats;
use crate::core::emitter::emit_list;
use crate::core::header::GenerationStamp;
use crate::core::parser::SourceParser;
use crate::core::{BuildReport, ConfigProvider, ListFormat, SourceDocument, Storage};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Parses the source once and writes every configured format from it.
pub struct BuildEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    formats: Vec<Box<dyn ListFormat>>,
}

impl<S: Storage, C: ConfigProvider> BuildEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let formats = all_formats(config.outputs());
        Self {
            storage,
            config,
            formats,
        }
    }

    pub fn formats(&self) -> &[Box<dyn ListFormat>] {
        &self.formats
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn parse(&self) -> Result<SourceDocument> {
        let doc = SourceParser::parse_file(&self.storage, self.config.source_path())?;

        if doc.entry_count() == 0 {
            tracing::warn!("No domains found in {}", self.config.source_path());
        }
        if !doc.metadata.is_empty() {
            tracing::debug!("Source metadata: {:?}", doc.metadata);
        }

        Ok(doc)
    }

    /// Pretty JSON overview of a parsed document, printed by `--dry-run`.
    pub fn dry_run_summary(&self, doc: &SourceDocument) -> Result<String> {
        let services: Vec<serde_json::Value> = doc
            .services
            .iter()
            .map(|group| serde_json::json!({ "name": group.name, "domains": group.domains.len() }))
            .collect();

        let summary = serde_json::json!({
            "source": self.config.source_path(),
            "metadata": doc.metadata,
            "domains": doc.entry_count(),
            "ungrouped": doc.ungrouped_count(),
            "services": services,
            "outputs": self.formats.iter().map(|f| f.output_path()).collect::<Vec<_>>(),
        });

        Ok(serde_json::to_string_pretty(&summary)?)
    }

    pub fn run(&self) -> Result<BuildReport> {
        self.run_at(Utc::now())
    }

    /// Same as [`run`](Self::run) with a fixed generation time.
    pub fn run_at(&self, now: DateTime<Utc>) -> Result<BuildReport> {
        tracing::info!("🚀 Building all formats...");

        let doc = self.parse()?;
        let stamp = GenerationStamp::at(now);

        let mut files = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            let generated = emit_list(
                &self.storage,
                format.as_ref(),
                &doc,
                self.config.list_info(),
                &stamp,
            )?;
            files.push(generated);
        }

        tracing::info!("✨ All {} formats generated successfully!", files.len());

        Ok(BuildReport {
            generated_at: now,
            source: self.config.source_path().to_string(),
            domains: doc.entry_count(),
            services: doc.services.len(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::BuildConfig;
    use crate::utils::error::BuildError;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_only: bool,
    }

    impl MockStorage {
        fn with_source(content: &str) -> Self {
            let storage = Self::default();
            storage.files.lock().unwrap().insert(
                "domains/uk-blocking-hosts.txt".to_string(),
                content.as_bytes().to_vec(),
            );
            storage
        }

        fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        fn exists(&self, path: &str) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn read_to_string(&self, path: &str) -> Result<String> {
            self.get_file(path).ok_or_else(|| BuildError::SourceNotFound {
                path: path.to_string(),
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(BuildError::WriteError {
                    path: path.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    const SOURCE: &str = "\
# Title: UK-Blocking Hosts
# Expires: 14 days

# Streaming
netflix.com
bbc.co.uk

# Forums
reddit.com
";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 20, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_run_writes_all_formats_in_order() {
        let storage = MockStorage::with_source(SOURCE);
        let engine = BuildEngine::new(storage.clone(), BuildConfig::default());

        let report = engine.run_at(now()).unwrap();

        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "controld/uk-blocking-hosts.txt",
                "mikrotik/uk-blocking-hosts.rsc",
                "unifi/uk-blocking-hosts.sh",
            ]
        );
        assert_eq!(report.domains, 3);
        assert_eq!(report.services, 2);

        let controld = storage.get_file("controld/uk-blocking-hosts.txt").unwrap();
        assert!(controld.contains("# Expires: 14 days\n"));
        assert!(controld.contains("# Version: 2024.1120.1830.01\n"));
        assert!(controld.contains("# Streaming\nnetflix.com\nbbc.co.uk\n\n# Forums\nreddit.com\n"));

        let mikrotik = storage.get_file("mikrotik/uk-blocking-hosts.rsc").unwrap();
        assert!(mikrotik
            .contains("/ip firewall address-list add list=uk-blocked address=reddit.com\n"));

        let unifi = storage.get_file("unifi/uk-blocking-hosts.sh").unwrap();
        assert!(unifi.contains("configure\n\n# Streaming\n"));
        assert!(unifi.ends_with("\ncommit\nsave\nexit\n"));
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let storage = MockStorage::default();
        let engine = BuildEngine::new(storage.clone(), BuildConfig::default());

        let err = engine.run_at(now()).unwrap_err();
        assert!(matches!(err, BuildError::SourceNotFound { .. }));
        assert!(storage.files.lock().unwrap().is_empty());
    }

    #[test]
    fn test_write_failure_aborts_run() {
        let storage = MockStorage {
            read_only: true,
            ..MockStorage::with_source(SOURCE)
        };
        let engine = BuildEngine::new(storage, BuildConfig::default());

        let err = engine.run_at(now()).unwrap_err();
        assert!(matches!(err, BuildError::WriteError { ref path, .. } if path == "controld/uk-blocking-hosts.txt"));
    }

    #[test]
    fn test_dry_run_summary_writes_nothing() {
        let storage = MockStorage::with_source(SOURCE);
        let engine = BuildEngine::new(storage.clone(), BuildConfig::default());

        let doc = engine.parse().unwrap();
        let summary: serde_json::Value =
            serde_json::from_str(&engine.dry_run_summary(&doc).unwrap()).unwrap();

        assert_eq!(summary["domains"], 3);
        assert_eq!(summary["services"][0]["name"], "Streaming");
        assert_eq!(summary["services"][0]["domains"], 2);
        assert_eq!(summary["metadata"]["expires"], "14 days");
        assert_eq!(storage.files.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_same_instant_is_byte_identical() {
        let first = MockStorage::with_source(SOURCE);
        let second = MockStorage::with_source(SOURCE);
        BuildEngine::new(first.clone(), BuildConfig::default())
            .run_at(now())
            .unwrap();
        BuildEngine::new(second.clone(), BuildConfig::default())
            .run_at(now())
            .unwrap();

        for path in [
            "controld/uk-blocking-hosts.txt",
            "mikrotik/uk-blocking-hosts.rsc",
            "unifi/uk-blocking-hosts.sh",
        ] {
            assert_eq!(first.get_file(path), second.get_file(path));
        }
    }
}
