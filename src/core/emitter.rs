use crate::core::header::{render_header, GenerationStamp};
use crate::core::{GeneratedFile, ListFormat, ListInfo, SourceDocument, Storage};
use crate::utils::error::Result;

/// Renders the complete file body for one format.
///
/// With service groups present each group is written under a `# <label>` line
/// and closed with a blank line, in first-seen order. Unlabelled runs are
/// written as blank-line-closed blocks at the position they were read, so the
/// parser's order holds unless a label is reopened. Without groups the flat
/// list is written as-is.
pub fn render_list<F: ListFormat + ?Sized>(
    format: &F,
    doc: &SourceDocument,
    info: &ListInfo,
    stamp: &GenerationStamp,
) -> String {
    let mut out = render_header(info, &doc.metadata, stamp, format.syntax(), doc.entry_count());
    out.push_str(&format.usage());
    out.push_str(format.preamble());

    if doc.has_services() {
        for (index, group) in doc.services.iter().enumerate() {
            push_ungrouped(&mut out, format, doc, index);
            out.push_str(&format!("# {}\n", group.name));
            push_entries(&mut out, format, &group.domains);
            out.push('\n');
        }
        push_ungrouped(&mut out, format, doc, doc.services.len());
    } else {
        push_entries(&mut out, format, &doc.domains);
    }

    out.push_str(format.trailer());
    out
}

fn push_ungrouped<F: ListFormat + ?Sized>(
    out: &mut String,
    format: &F,
    doc: &SourceDocument,
    index: usize,
) {
    for run in doc.ungrouped_before(index) {
        push_entries(out, format, &run.domains);
        out.push('\n');
    }
}

fn push_entries<F: ListFormat + ?Sized>(out: &mut String, format: &F, domains: &[String]) {
    for domain in domains {
        out.push_str(&format.format_entry(domain));
        out.push('\n');
    }
}

/// Renders one format and writes it through `storage`.
///
/// The body is built in memory first, so a failure before the write leaves no
/// file behind. A failing write is returned as is and the file is not cleaned up.
pub fn emit_list<S: Storage, F: ListFormat + ?Sized>(
    storage: &S,
    format: &F,
    doc: &SourceDocument,
    info: &ListInfo,
    stamp: &GenerationStamp,
) -> Result<GeneratedFile> {
    tracing::info!("🔨 Building {} list: {}", format.name(), format.output_path());

    let body = render_list(format, doc, info, stamp);
    storage.write_file(format.output_path(), body.as_bytes())?;

    tracing::info!("✅ Generated {}", format.output_path());
    Ok(GeneratedFile {
        format: format.name().to_string(),
        path: format.output_path().to_string(),
        entries: doc.entry_count(),
        bytes: body.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::SourceParser;
    use chrono::{TimeZone, Utc};

    struct PlainFormat;

    impl ListFormat for PlainFormat {
        fn name(&self) -> &str {
            "Plain"
        }

        fn syntax(&self) -> &str {
            "Plain"
        }

        fn output_path(&self) -> &str {
            "plain.txt"
        }

        fn usage(&self) -> String {
            "# usage\n\n".to_string()
        }

        fn format_entry(&self, domain: &str) -> String {
            format!("+{}", domain)
        }
    }

    fn stamp() -> GenerationStamp {
        GenerationStamp::at(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap())
    }

    fn body_after_usage(rendered: &str) -> &str {
        rendered.split_once("# usage\n\n").map(|(_, body)| body).unwrap()
    }

    #[test]
    fn test_flat_rendering() {
        let doc = SourceParser::parse_str("a.example\nb.example\n");
        let rendered = render_list(&PlainFormat, &doc, &ListInfo::default(), &stamp());

        assert_eq!(body_after_usage(&rendered), "+a.example\n+b.example\n");
    }

    #[test]
    fn test_grouped_rendering_keeps_unlabelled_in_place() {
        let doc = SourceParser::parse_str(
            "loose.example\n\n# Streaming\nnetflix.com\nbbc.co.uk\n\nmiddle.example\n# News\ncnn.com\n\nlate.example\n",
        );
        let rendered = render_list(&PlainFormat, &doc, &ListInfo::default(), &stamp());

        assert_eq!(
            body_after_usage(&rendered),
            "+loose.example\n\n# Streaming\n+netflix.com\n+bbc.co.uk\n\n+middle.example\n\n# News\n+cnn.com\n\n+late.example\n\n"
        );
        assert!(rendered.contains("# Number of entries: 6\n"));
    }

    #[test]
    fn test_grouped_rendering_matches_parser_order() {
        let doc = SourceParser::parse_str("loose.example\n\n# Streaming\nnetflix.com\n\nlate.example\n");
        let rendered = render_list(&PlainFormat, &doc, &ListInfo::default(), &stamp());

        let emitted: Vec<&str> = body_after_usage(&rendered)
            .lines()
            .filter_map(|line| line.strip_prefix('+'))
            .collect();
        assert_eq!(emitted, doc.domains);
        assert_eq!(emitted, vec!["loose.example", "netflix.com", "late.example"]);
    }

    #[test]
    fn test_empty_document_renders_header_only() {
        let doc = SourceDocument::default();
        let rendered = render_list(&PlainFormat, &doc, &ListInfo::default(), &stamp());

        assert!(rendered.contains("# Number of entries: 0\n"));
        assert_eq!(body_after_usage(&rendered), "");
    }
}
