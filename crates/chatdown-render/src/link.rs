//! Validated link targets.
//!
//! A link destination is modeled as a value type that can only be
//! constructed from a URL passing the scheme allow-list, so an executable
//! scheme can never reach an `href` attribute.

use std::fmt;

/// Schemes that are safe to emit into an `href` attribute.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Why a link target was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// The URL uses a scheme outside the allow-list.
    #[error("disallowed URL scheme '{0}'")]
    DisallowedScheme(String),
    /// The URL contains whitespace or an ASCII control character.
    #[error("URL contains whitespace or control characters")]
    ForbiddenCharacter,
}

/// A link destination validated against the scheme allow-list.
///
/// Scheme-less (relative or fragment) references are allowed; absolute
/// references must use `http`, `https` or `mailto`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget(String);

impl LinkTarget {
    /// Validate a raw URL.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::ForbiddenCharacter`] if the URL contains
    /// whitespace or control characters, or
    /// [`LinkError::DisallowedScheme`] if it carries a scheme outside the
    /// allow-list.
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        if raw
            .chars()
            .any(|c| c.is_whitespace() || c.is_ascii_control())
        {
            return Err(LinkError::ForbiddenCharacter);
        }
        if let Some(scheme) = scheme_of(raw) {
            let scheme = scheme.to_ascii_lowercase();
            if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                return Err(LinkError::DisallowedScheme(scheme));
            }
        }
        Ok(Self(raw.to_owned()))
    }

    /// The validated URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the scheme of a URL, if it has one.
///
/// A colon before any `/`, `?` or `#` terminates a scheme; any other shape
/// is a relative reference.
fn scheme_of(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    if url.as_bytes()[end] == b':' {
        Some(&url[..end])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_allowed() {
        let target = LinkTarget::parse("https://example.com/page?q=1").unwrap();
        assert_eq!(target.as_str(), "https://example.com/page?q=1");
    }

    #[test]
    fn test_http_and_mailto_allowed() {
        assert!(LinkTarget::parse("http://example.com").is_ok());
        assert!(LinkTarget::parse("mailto:user@example.com").is_ok());
    }

    #[test]
    fn test_relative_allowed() {
        assert!(LinkTarget::parse("/docs/page").is_ok());
        assert!(LinkTarget::parse("page.html").is_ok());
        assert!(LinkTarget::parse("#section").is_ok());
        // Protocol-relative inherits http(s) from the display context.
        assert!(LinkTarget::parse("//example.com/x").is_ok());
    }

    #[test]
    fn test_javascript_rejected() {
        let err = LinkTarget::parse("javascript:alert(1)").unwrap_err();
        assert_eq!(err, LinkError::DisallowedScheme("javascript".to_owned()));
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let err = LinkTarget::parse("JaVaScRiPt:alert(1)").unwrap_err();
        assert_eq!(err, LinkError::DisallowedScheme("javascript".to_owned()));
    }

    #[test]
    fn test_data_rejected() {
        let err = LinkTarget::parse("data:text/html,x").unwrap_err();
        assert!(matches!(err, LinkError::DisallowedScheme(_)));
    }

    #[test]
    fn test_whitespace_rejected() {
        let err = LinkTarget::parse("https://example.com/a b").unwrap_err();
        assert_eq!(err, LinkError::ForbiddenCharacter);
    }

    #[test]
    fn test_control_character_rejected() {
        let err = LinkTarget::parse("https://example.com/\u{1}x").unwrap_err();
        assert_eq!(err, LinkError::ForbiddenCharacter);
    }

    #[test]
    fn test_colon_after_slash_is_not_a_scheme() {
        // Path contains a colon but the reference is relative.
        assert!(LinkTarget::parse("/a/b:c").is_ok());
    }
}
