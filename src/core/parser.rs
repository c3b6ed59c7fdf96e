use crate::core::{MetadataKey, SourceDocument, Storage};
use crate::utils::error::{BuildError, Result};
use crate::utils::validation::is_valid_domain;

const COMMENT_MARKER: char = '#';
const SECTION_DIVIDER: &str = "# ---";
const MAX_LABEL_WORDS: usize = 3;

/// Line-oriented reader for the domain source file.
///
/// The grammar is loose on purpose: comments may carry `Key: value` metadata
/// or a short service label, a blank line closes the current service, and any
/// other line that passes [`is_valid_domain`] is an entry. Lines matching
/// none of these are skipped without error.
#[derive(Debug, Default)]
pub struct SourceParser {
    document: SourceDocument,
    current_service: Option<String>,
    skipped: usize,
}

impl SourceParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_str(content: &str) -> SourceDocument {
        let mut parser = Self::new();
        for line in content.lines() {
            parser.feed_line(line);
        }
        parser.finish()
    }

    pub fn parse_file<S: Storage>(storage: &S, path: &str) -> Result<SourceDocument> {
        if !storage.exists(path) {
            return Err(BuildError::SourceNotFound {
                path: path.to_string(),
            });
        }

        tracing::info!("📖 Reading source file: {}", path);
        let content = storage.read_to_string(path)?;
        Ok(Self::parse_str(&content))
    }

    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();

        if line.starts_with(COMMENT_MARKER) {
            if let Some((key, value)) = extract_metadata(line) {
                tracing::debug!("Header metadata {:?} = {}", key, value);
                self.document.metadata.set(key, value);
            }
            if let Some(label) = extract_service_label(line) {
                self.current_service = Some(label.to_string());
            }
            return;
        }

        if line.is_empty() {
            self.current_service = None;
            return;
        }

        if is_valid_domain(line) {
            self.document
                .push_domain(line, self.current_service.as_deref());
        } else {
            tracing::debug!("Skipping line: {}", line);
            self.skipped += 1;
        }
    }

    pub fn finish(self) -> SourceDocument {
        tracing::info!(
            "✅ Parsed {} domains ({} grouped into {} services, {} lines skipped)",
            self.document.entry_count(),
            self.document.grouped_count(),
            self.document.services.len(),
            self.skipped
        );
        self.document
    }
}

/// `# Expires: 14 days` style lines. Only the four known keys are kept.
fn extract_metadata(line: &str) -> Option<(MetadataKey, String)> {
    if !line.contains(": ") {
        return None;
    }

    let text = line[COMMENT_MARKER.len_utf8()..].trim();
    MetadataKey::ALL.iter().find_map(|key| {
        text.strip_prefix(key.prefix())
            .map(|value| (*key, value.trim().to_string()))
    })
}

/// Short colon-free comments such as `# Streaming` name the block below them.
fn extract_service_label(line: &str) -> Option<&str> {
    if line.starts_with(SECTION_DIVIDER) || line.chars().count() <= 2 {
        return None;
    }

    let text = line[COMMENT_MARKER.len_utf8()..].trim();
    if text.is_empty() || text.contains(':') {
        return None;
    }

    (text.split_whitespace().count() <= MAX_LABEL_WORDS).then_some(text)
}
