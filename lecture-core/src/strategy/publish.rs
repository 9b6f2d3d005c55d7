//! Publishing strategies for a content management system.
//!
//! [`ContentKind`] maps a configured kind onto its strategy once, so the
//! publishing path itself never branches on the kind.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing a [`ContentKind`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentKindError {
    #[error("unknown content kind: {0}")]
    Unknown(String),
}

/// Renders content for publication.
pub trait PublishingStrategy {
    fn publish(&self, content: &str) -> String;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> PublishingStrategy for F
where
    F: Fn(&str) -> String,
{
    fn publish(&self, content: &str) -> String {
        self(content)
    }
}

/// Publishes only the first sentence.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end of
/// the content.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryPublishing;

impl PublishingStrategy for SummaryPublishing {
    fn publish(&self, content: &str) -> String {
        let content = content.trim();
        let mut chars = content.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
            if matches!(c, '.' | '!' | '?') && at_boundary {
                return content[..i + c.len_utf8()].to_string();
            }
        }
        content.to_string()
    }

    fn name(&self) -> &str {
        "summary"
    }
}

/// Publishes the content unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPublishing;

impl PublishingStrategy for FullPublishing {
    fn publish(&self, content: &str) -> String {
        content.to_string()
    }

    fn name(&self) -> &str {
        "full"
    }
}

/// The configurable kinds of publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Summary,
    Full,
}

impl ContentKind {
    pub fn all() -> [ContentKind; 2] {
        [ContentKind::Summary, ContentKind::Full]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Summary => "summary",
            ContentKind::Full => "full",
        }
    }

    /// The strategy that publishes this kind of content.
    pub fn strategy(self) -> Box<dyn PublishingStrategy> {
        match self {
            ContentKind::Summary => Box::new(SummaryPublishing),
            ContentKind::Full => Box::new(FullPublishing),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ContentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Ok(ContentKind::Summary),
            "full" => Ok(ContentKind::Full),
            _ => Err(ContentKindError::Unknown(s.to_string())),
        }
    }
}
