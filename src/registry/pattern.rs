//! Method-name patterns: exact names and prefix wildcards.
//!
//! Patterns are a tagged enum rather than raw strings so suffix capture is
//! a single place in the code instead of per-handler substring arithmetic.
//! The wildcard marker is a trailing `*` and only the trailing position is
//! legal.

use std::fmt;

use thiserror::Error;

/// Wildcard marker used in pattern literals.
pub const WILDCARD: char = '*';

#[derive(Debug, Error, PartialEq)]
pub enum PatternError {
    #[error("wildcard marker only allowed in final position: {0}")]
    MisplacedWildcard(String),
    #[error("empty pattern")]
    Empty,
}

/// A registered method pattern: one exact method name, or a family of
/// methods sharing a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MethodPattern {
    Exact(String),
    PrefixWildcard { prefix: String },
}

impl MethodPattern {
    /// Parse a pattern literal. `name_*` becomes a prefix wildcard over
    /// `name_`; anything without a `*` is an exact name.
    pub fn parse(literal: &str) -> Result<Self, PatternError> {
        if literal.is_empty() {
            return Err(PatternError::Empty);
        }
        match literal.find(WILDCARD) {
            None => Ok(MethodPattern::Exact(literal.to_string())),
            Some(idx) if idx == literal.len() - 1 => Ok(MethodPattern::PrefixWildcard {
                prefix: literal[..idx].to_string(),
            }),
            Some(_) => Err(PatternError::MisplacedWildcard(literal.to_string())),
        }
    }

    /// Match an incoming method name. Returns `None` on a miss; on a
    /// wildcard hit, `Some(Some(suffix))` with the captured remainder
    /// (which may be empty). Never panics, for any input.
    pub fn matches(&self, method: &str) -> Option<Option<String>> {
        match self {
            MethodPattern::Exact(name) => (name == method).then(|| None),
            MethodPattern::PrefixWildcard { prefix } => method
                .strip_prefix(prefix.as_str())
                .map(|suffix| Some(suffix.to_string())),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, MethodPattern::PrefixWildcard { .. })
    }

    /// The fixed prefix for wildcards, the full name for exact patterns.
    pub fn fixed_part(&self) -> &str {
        match self {
            MethodPattern::Exact(name) => name,
            MethodPattern::PrefixWildcard { prefix } => prefix,
        }
    }
}

impl fmt::Display for MethodPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodPattern::Exact(name) => f.write_str(name),
            MethodPattern::PrefixWildcard { prefix } => write!(f, "{}{}", prefix, WILDCARD),
        }
    }
}
