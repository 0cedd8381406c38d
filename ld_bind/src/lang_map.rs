//! Natural-language maps (`nameMap`, `contentMap`, ...).

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Language tag to text.
///
/// Stored apart from the property of the same name: `name` holds the default
/// value and `nameMap` the per-language variants. The two never overwrite
/// each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangMap(BTreeMap<String, String>);

impl LangMap {
    pub fn new() -> Self {
        LangMap(BTreeMap::new())
    }

    pub fn insert(&mut self, tag: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(tag.into(), text.into())
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.0.remove(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(tag, text)| (tag.as_str(), text.as_str()))
    }

    /// Entries whose value is not a string are dropped.
    pub fn from_json(map: &Map<String, Value>) -> LangMap {
        let mut out = LangMap::new();
        for (tag, value) in map {
            match value.as_str() {
                Some(text) => {
                    out.insert(tag.clone(), text);
                }
                None => tracing::debug!(tag = %tag, "dropping non-string language map entry"),
            }
        }
        out
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LangMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LangMap(
            iter.into_iter()
                .map(|(tag, text)| (tag.into(), text.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_and_get() {
        let mut map = LangMap::new();
        assert!(map.is_empty());
        map.insert("en", "Hello");
        assert_eq!(map.insert("en", "Hi"), Some("Hello".to_string()));
        assert_eq!(map.get("en"), Some("Hi"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.remove("en"), Some("Hi".to_string()));
        assert!(map.get("en").is_none());
    }

    #[test]
    fn from_json_drops_non_strings() {
        let input = json!({"en": "Hello", "fr": 3, "de": "Hallo", "ja": null});
        let map = LangMap::from_json(input.as_object().unwrap());
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("de"), Some("Hallo"));
        assert!(map.get("fr").is_none());
    }

    #[test]
    fn empty_map_encodes_as_empty_object() {
        assert_eq!(LangMap::new().to_json(), json!({}));
    }

    #[test]
    fn collects_from_pairs() {
        let map: LangMap = [("en", "cat"), ("fr", "chat")].into_iter().collect();
        assert_eq!(map.to_json(), json!({"en": "cat", "fr": "chat"}));
        let tags: Vec<&str> = map.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec!["en", "fr"]);
    }
}
