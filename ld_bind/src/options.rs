use serde::{Deserialize, Serialize};

/// Default recursion limit for nested records and unknown values.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Decode/encode settings.
///
/// Derives serde so it can sit inside a host application's own config file:
///
/// ```
/// let options: ld_bind::Options = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
/// assert_eq!(options.max_depth, 16);
/// assert!(!options.strict_iris);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Deepest nesting level accepted for records and unknown values.
    pub max_depth: usize,
    /// Fail instead of keeping an unknown value when an IRI-only functional
    /// property (`id`, `href`) holds something that is not an IRI.
    pub strict_iris: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_iris: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_max_depth(&mut self, depth: usize) -> &mut Self {
        self.max_depth = depth;
        self
    }

    pub fn set_strict_iris(&mut self, strict: bool) -> &mut Self {
        self.strict_iris = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!options.strict_iris);
    }

    #[test]
    fn setters_chain() {
        let mut options = Options::new();
        options.set_max_depth(3).set_strict_iris(true);
        assert_eq!(options.max_depth, 3);
        assert!(options.strict_iris);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: Options = serde_json::from_str(r#"{"strict_iris": true}"#).unwrap();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert!(options.strict_iris);
    }
}
