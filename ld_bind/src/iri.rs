//! IRI values.
//!
//! Absolute IRIs are validated with [`url::Url`], relative references with a
//! character check. The original text is kept so that serialization echoes
//! exactly what was read.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{BindError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri {
    text: String,
    url: Option<Url>,
}

impl Iri {
    pub fn parse(text: &str) -> Result<Iri> {
        if text.is_empty() {
            return Err(invalid(text, "empty string"));
        }
        if let Some(c) = text.chars().find(|c| is_forbidden(*c)) {
            return Err(invalid(text, &format!("forbidden character {:?}", c)));
        }
        if has_scheme(text) {
            let url = Url::parse(text).map_err(|e| invalid(text, &e.to_string()))?;
            Ok(Iri {
                text: text.to_string(),
                url: Some(url),
            })
        } else {
            Ok(Iri {
                text: text.to_string(),
                url: None,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed URL, for absolute IRIs only.
    pub fn as_url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn is_absolute(&self) -> bool {
        self.url.is_some()
    }

    /// Resolve a relative reference against `base`. Absolute IRIs are
    /// returned unchanged.
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        match &self.url {
            Some(url) => Ok(url.clone()),
            None => base
                .join(&self.text)
                .map_err(|e| invalid(&self.text, &e.to_string())),
        }
    }
}

fn invalid(text: &str, reason: &str) -> BindError {
    BindError::InvalidIri {
        iri: text.to_string(),
        reason: reason.to_string(),
    }
}

fn is_forbidden(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`')
}

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
fn has_scheme(text: &str) -> bool {
    let Some((scheme, _)) = text.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Iri {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self> {
        Iri::parse(s)
    }
}

impl TryFrom<&str> for Iri {
    type Error = BindError;

    fn try_from(value: &str) -> Result<Self> {
        Iri::parse(value)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Iri {
            text: url.as_str().to_string(),
            url: Some(url),
        }
    }
}
