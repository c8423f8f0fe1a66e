//! Workflow volume definitions
//!
//! A volume attaches named storage to workflow steps. In the document a
//! volume is written either as a bare entry keyed by its name or as an
//! object carrying an explicit `name` field; both decode to [`Volume`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Driver applied when a volume definition omits `driver`.
pub const DEFAULT_VOLUME_DRIVER: &str = "local";

fn default_driver() -> String {
    DEFAULT_VOLUME_DRIVER.to_string()
}

/// A named volume available to workflow steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume name (unique within a workflow)
    pub name: String,

    /// Storage driver backing the volume (defaults to "local")
    #[serde(default = "default_driver")]
    pub driver: String,

    /// Driver-specific options
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub driver_opts: HashMap<String, String>,
}

impl Volume {
    /// Create a volume with the default driver and no options
    pub fn new(name: String) -> Self {
        Volume {
            name,
            driver: default_driver(),
            driver_opts: HashMap::new(),
        }
    }

    /// Set the driver
    pub fn with_driver(mut self, driver: String) -> Self {
        self.driver = driver;
        self
    }

    /// Add a driver option
    pub fn with_driver_opt(mut self, key: String, value: String) -> Self {
        self.driver_opts.insert(key, value);
        self
    }
}

/// Ordered collection of volumes, in document order
///
/// Entries are owned and duplicates are kept as written; name
/// uniqueness is checked by workflow compilation, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volumes(Vec<Volume>);

impl Volumes {
    /// Create an empty collection
    pub fn new() -> Self {
        Volumes(Vec::new())
    }

    /// Append a volume, keeping document order
    pub fn push(&mut self, volume: Volume) {
        self.0.push(volume);
    }

    /// Number of volumes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate volumes in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Volume> {
        self.0.iter()
    }

    /// First volume with the given name, if any
    pub fn get(&self, name: &str) -> Option<&Volume> {
        self.0.iter().find(|v| v.name == name)
    }
}

impl From<Vec<Volume>> for Volumes {
    fn from(volumes: Vec<Volume>) -> Self {
        Volumes(volumes)
    }
}

impl IntoIterator for Volumes {
    type Item = Volume;
    type IntoIter = std::vec::IntoIter<Volume>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Volumes {
    type Item = &'a Volume;
    type IntoIter = std::slice::Iter<'a, Volume>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_new_applies_default_driver() {
        let volume = Volume::new("cache".to_string());
        assert_eq!(volume.name, "cache");
        assert_eq!(volume.driver, DEFAULT_VOLUME_DRIVER);
        assert!(volume.driver_opts.is_empty());
    }

    #[test]
    fn test_volume_builder() {
        let volume = Volume::new("data".to_string())
            .with_driver("nfs".to_string())
            .with_driver_opt("addr".to_string(), "10.0.0.1".to_string());

        assert_eq!(volume.driver, "nfs");
        assert_eq!(volume.driver_opts.get("addr"), Some(&"10.0.0.1".to_string()));
    }

    #[test]
    fn test_volumes_keep_order_and_duplicates() {
        let mut volumes = Volumes::new();
        volumes.push(Volume::new("a".to_string()));
        volumes.push(Volume::new("b".to_string()));
        volumes.push(Volume::new("a".to_string()));

        let names: Vec<&str> = volumes.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_volumes_get_by_name() {
        let volumes: Volumes = vec![
            Volume::new("a".to_string()),
            Volume::new("b".to_string()).with_driver("nfs".to_string()),
        ]
        .into();

        assert_eq!(volumes.get("b").map(|v| v.driver.as_str()), Some("nfs"));
        assert!(volumes.get("c").is_none());
    }

    #[test]
    fn test_serialize_skips_empty_driver_opts() {
        let volume = Volume::new("cache".to_string());
        let yaml = serde_yaml::to_string(&volume).unwrap();
        assert!(!yaml.contains("driver_opts"));
    }
}
