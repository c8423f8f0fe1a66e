//! YAML node utilities
//!
//! Shared helpers for walking `serde_yaml` node trees while decoding
//! workflow definition entities. Field accessors here are strict: an
//! absent field is fine, a present field with the wrong shape is a
//! [`DecodeError`].

use crate::error::{DecodeError, Result};
use serde_yaml::Value as YamlValue;
use std::collections::HashMap;

/// YAML node helpers
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML text into a node tree
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Human-readable name of a node's kind, for error messages
    pub fn node_kind(value: &YamlValue) -> &'static str {
        match value {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "boolean",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Tagged(_) => "tagged value",
        }
    }

    /// Get an optional string field from a YAML object
    ///
    /// Absent fields return `None`; a present field that is not a string
    /// scalar is an error.
    pub fn optional_string(obj: &YamlValue, field: &str) -> Result<Option<String>> {
        match obj.get(field) {
            None => Ok(None),
            Some(YamlValue::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(DecodeError::TypeMismatch {
                field: field.to_string(),
                expected: "string".to_string(),
                actual: Self::node_kind(other).to_string(),
            }),
        }
    }

    /// Decode an optional mapping field into string key/value pairs
    ///
    /// Absent fields decode to an empty map. Non-mapping nodes, and
    /// entries whose key or value is not a string scalar, are errors.
    pub fn optional_string_map(obj: &YamlValue, field: &str) -> Result<HashMap<String, String>> {
        let node = match obj.get(field) {
            None => return Ok(HashMap::new()),
            Some(node) => node,
        };

        let mapping = node.as_mapping().ok_or_else(|| DecodeError::TypeMismatch {
            field: field.to_string(),
            expected: "mapping".to_string(),
            actual: Self::node_kind(node).to_string(),
        })?;

        let mut map = HashMap::new();
        for (key, value) in mapping {
            let key = key.as_str().ok_or_else(|| DecodeError::InvalidValue {
                field: field.to_string(),
                message: format!("mapping keys must be strings, got {}", Self::node_kind(key)),
            })?;
            let value = value
                .as_str()
                .ok_or_else(|| DecodeError::TypeMismatch {
                    field: format!("{}.{}", field, key),
                    expected: "string".to_string(),
                    actual: Self::node_kind(value).to_string(),
                })?;
            map.insert(key.to_string(), value.to_string());
        }
        Ok(map)
    }

    /// Log a warning for every key not in `known_fields`
    ///
    /// Unknown fields never fail a decode; a close known field is
    /// suggested when one exists.
    pub fn warn_unknown_fields(
        mapping: &serde_yaml::Mapping,
        known_fields: &[&str],
        context: &str,
    ) {
        for key in mapping.keys() {
            if let Some(field) = key.as_str() {
                if !known_fields.contains(&field) {
                    match Self::find_similar_field(field, known_fields) {
                        Some(similar) => log::warn!(
                            "Unknown field '{}' in {}. Did you mean '{}'?",
                            field,
                            context,
                            similar
                        ),
                        None => log::warn!("Unknown field '{}' in {}", field, context),
                    }
                }
            }
        }
    }

    /// Find a known field within edit distance 2 of `field`
    fn find_similar_field<'a>(field: &str, known_fields: &[&'a str]) -> Option<&'a str> {
        known_fields
            .iter()
            .map(|known| (*known, levenshtein_distance(field, known)))
            .filter(|(_, distance)| *distance <= 2)
            .min_by_key(|(_, distance)| *distance)
            .map(|(known, _)| known)
    }
}

/// Edit distance between two strings, two-row dynamic programming
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = YamlParser::parse("name: cache\ndriver: local\n").unwrap();
        assert!(yaml.is_mapping());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = YamlParser::parse("key: [unclosed");
        assert!(matches!(result, Err(DecodeError::Yaml(_))));
    }

    #[test]
    fn test_optional_string_present_and_absent() {
        let yaml = YamlParser::parse("name: cache").unwrap();
        assert_eq!(
            YamlParser::optional_string(&yaml, "name").unwrap(),
            Some("cache".to_string())
        );
        assert_eq!(YamlParser::optional_string(&yaml, "driver").unwrap(), None);
    }

    #[test]
    fn test_optional_string_wrong_shape() {
        let yaml = YamlParser::parse("name: [a, b]").unwrap();
        let err = YamlParser::optional_string(&yaml, "name").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { ref field, ref actual, .. }
                if field == "name" && actual == "sequence"
        ));
    }

    #[test]
    fn test_optional_string_map() {
        let yaml = YamlParser::parse("driver_opts:\n  addr: 10.0.0.1\n  device: sda1\n").unwrap();
        let map = YamlParser::optional_string_map(&yaml, "driver_opts").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("addr"), Some(&"10.0.0.1".to_string()));
    }

    #[test]
    fn test_optional_string_map_absent_is_empty() {
        let yaml = YamlParser::parse("name: cache").unwrap();
        let map = YamlParser::optional_string_map(&yaml, "driver_opts").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_optional_string_map_rejects_sequence() {
        let yaml = YamlParser::parse("driver_opts:\n  - addr\n").unwrap();
        let err = YamlParser::optional_string_map(&yaml, "driver_opts").unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_optional_string_map_rejects_non_string_value() {
        let yaml = YamlParser::parse("driver_opts:\n  size: 10\n").unwrap();
        let err = YamlParser::optional_string_map(&yaml, "driver_opts").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { ref field, ref actual, .. }
                if field == "driver_opts.size" && actual == "number"
        ));
    }

    #[test]
    fn test_node_kind_names() {
        let yaml = YamlParser::parse("[1, 2]").unwrap();
        assert_eq!(YamlParser::node_kind(&yaml), "sequence");
        assert_eq!(YamlParser::node_kind(&YamlValue::Null), "null");
    }

    #[test]
    fn test_find_similar_field() {
        assert_eq!(
            YamlParser::find_similar_field("drivr", &["name", "driver", "driver_opts"]),
            Some("driver")
        );
        assert_eq!(
            YamlParser::find_similar_field("completely_different", &["name", "driver"]),
            None
        );
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("driver", "driver"), 0);
        assert_eq!(levenshtein_distance("drivr", "driver"), 1);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }
}
