//! Workflow volume parsing
//!
//! Decodes the `volumes` section of a workflow definition into
//! canonical [`Volume`] values. Two shorthand shapes converge here: a
//! collection entry keyed by the volume name (`cache: { driver: nfs }`)
//! and an explicit object carrying a `name` field. An explicit name
//! wins over the entry key, and the driver falls back to
//! [`DEFAULT_VOLUME_DRIVER`] when unspecified.

use crate::error::{DecodeError, Result};
use crate::yaml_parser::YamlParser;
use gantry_core::workflow::{Volume, Volumes, DEFAULT_VOLUME_DRIVER};
use serde_yaml::Value as YamlValue;
use std::collections::HashMap;

/// Fields a volume body may carry
const VOLUME_FIELDS: &[&str] = &["name", "driver", "driver_opts"];

/// Volume parser
pub struct VolumeParser;

/// Decoded volume body, name and driver not yet resolved
///
/// Empty strings count as unset, matching the fallback rules the rest
/// of the document format uses.
struct VolumeBody {
    name: Option<String>,
    driver: Option<String>,
    driver_opts: HashMap<String, String>,
}

impl VolumeParser {
    /// Parse a single volume definition from YAML text
    pub fn parse(yaml_str: &str) -> Result<Volume> {
        let yaml = YamlParser::parse(yaml_str)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Parse a single volume definition from a YAML node
    ///
    /// The node must be a mapping with an explicit `name` field;
    /// `driver` and `driver_opts` are optional.
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<Volume> {
        let mut body = Self::parse_body(yaml)?;
        let name = body.name.take().ok_or_else(|| DecodeError::MissingField {
            field: "name".to_string(),
        })?;
        Ok(Self::resolve(name, body))
    }

    /// Parse a `volumes` section from YAML text
    pub fn parse_collection(yaml_str: &str) -> Result<Volumes> {
        let yaml = YamlParser::parse(yaml_str)?;
        Self::parse_collection_from_yaml(&yaml)
    }

    /// Parse a `volumes` section from a YAML node
    ///
    /// The node must be a mapping from volume key to volume body;
    /// sequences are rejected, the section is keyed, not positional.
    /// Entries keep their document order. A body's explicit `name` wins
    /// over the entry key. Duplicate names are kept as written.
    pub fn parse_collection_from_yaml(yaml: &YamlValue) -> Result<Volumes> {
        let mapping = yaml.as_mapping().ok_or_else(|| DecodeError::TypeMismatch {
            field: "volumes".to_string(),
            expected: "mapping".to_string(),
            actual: YamlParser::node_kind(yaml).to_string(),
        })?;

        let mut volumes = Volumes::new();
        for (key, value) in mapping {
            let key = key.as_str().ok_or_else(|| DecodeError::InvalidValue {
                field: "volumes".to_string(),
                message: format!(
                    "volume keys must be strings, got {}",
                    YamlParser::node_kind(key)
                ),
            })?;

            let mut body = Self::parse_body(value)?;
            let name = body.name.take().unwrap_or_else(|| key.to_string());
            volumes.push(Self::resolve(name, body));
        }
        Ok(volumes)
    }

    /// Decode a volume body without resolving its name
    ///
    /// A null node is the empty body (`cache:` declares a volume with
    /// all defaults).
    fn parse_body(yaml: &YamlValue) -> Result<VolumeBody> {
        if yaml.is_null() {
            return Ok(VolumeBody {
                name: None,
                driver: None,
                driver_opts: HashMap::new(),
            });
        }

        let mapping = yaml.as_mapping().ok_or_else(|| DecodeError::TypeMismatch {
            field: "volume".to_string(),
            expected: "mapping".to_string(),
            actual: YamlParser::node_kind(yaml).to_string(),
        })?;
        YamlParser::warn_unknown_fields(mapping, VOLUME_FIELDS, "volume");

        let name = YamlParser::optional_string(yaml, "name")?.filter(|s| !s.is_empty());
        let driver = YamlParser::optional_string(yaml, "driver")?.filter(|s| !s.is_empty());
        let driver_opts = YamlParser::optional_string_map(yaml, "driver_opts")?;

        Ok(VolumeBody {
            name,
            driver,
            driver_opts,
        })
    }

    /// Build the canonical volume, applying the driver default
    fn resolve(name: String, body: VolumeBody) -> Volume {
        Volume {
            name,
            driver: body
                .driver
                .unwrap_or_else(|| DEFAULT_VOLUME_DRIVER.to_string()),
            driver_opts: body.driver_opts,
        }
    }
}
