use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceUrlError {
    #[error("vocabulary source URL is empty")]
    Empty,

    #[error("vocabulary source URL is invalid: {0}")]
    Invalid(#[from] url::ParseError),
}

/// Validated URL of the published sheet CSV export.
///
/// Loading is blocked with a user-facing config error when no source is
/// configured, so the only way to obtain one of these is through [`parse`].
///
/// [`parse`]: SourceUrl::parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(Url);

impl SourceUrl {
    /// Parses and validates a source URL.
    ///
    /// # Errors
    ///
    /// Returns `SourceUrlError::Empty` for blank input and
    /// `SourceUrlError::Invalid` when the URL does not parse.
    pub fn parse(raw: &str) -> Result<Self, SourceUrlError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SourceUrlError::Empty);
        }
        Ok(Self(Url::parse(trimmed)?))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
