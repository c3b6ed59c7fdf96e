use crate::utils::error::{BuildError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Syntactic check applied to every non-comment source line.
///
/// A domain needs at least one dot, no whitespace or quote characters, and
/// must not look like a comment. Nothing else is checked: `192.168.1.1`
/// passes, `localhost` does not. Quotes are refused because entries are
/// spliced into single-quoted router commands.
pub fn is_valid_domain(candidate: &str) -> bool {
    candidate.contains('.')
        && !candidate
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '"')
        && !candidate.starts_with('#')
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BuildError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Names spliced into router commands (address lists, domain groups).
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value
        .chars()
        .any(|c| c.is_whitespace() || c == '\'' || c == '"')
    {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot contain whitespace or quotes".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_domain() {
        assert!(is_valid_domain("a.b"));
        assert!(is_valid_domain("bbc.co.uk"));
        assert!(is_valid_domain("192.168.1.1"));
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain("bad domain.com"));
        assert!(!is_valid_domain("tab\tdomain.com"));
        assert!(!is_valid_domain("#netflix.com"));
        assert!(!is_valid_domain("evil.com';delete"));
        assert!(!is_valid_domain("\"quoted\".example"));
        assert!(!is_valid_domain(""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("list.homepage", "https://example.com").is_ok());
        assert!(validate_url("list.homepage", "http://example.com").is_ok());
        assert!(validate_url("list.homepage", "").is_err());
        assert!(validate_url("list.homepage", "invalid-url").is_err());
        assert!(validate_url("list.homepage", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("outputs.mikrotik_list", "uk-blocked").is_ok());
        assert!(validate_identifier("outputs.unifi_group", "UK_BLOCKED").is_ok());
        assert!(validate_identifier("outputs.unifi_group", "UK BLOCKED").is_err());
        assert!(validate_identifier("outputs.unifi_group", "UK'BLOCKED").is_err());
        assert!(validate_identifier("outputs.unifi_group", "  ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source.path", "domains/uk-blocking-hosts.txt").is_ok());
        assert!(validate_path("source.path", "").is_err());
        assert!(validate_path("source.path", "bad\0path").is_err());
    }
}
