//! Serializable transformer configuration
//!
//! Key mappings are often declared next to the code that receives a payload,
//! as a JSON document:
//!
//! ```json
//! {
//!   "source_keys": ["fname", "lname", "age"],
//!   "target_keys": ["first_name", "last_name", "age:integer"],
//!   "strict": true
//! }
//! ```
//!
//! Loading that document from wherever it lives is up to the caller; this module
//! parses and validates it.

use crate::caster::CastType;
use crate::keys::OrderedKeySet;
use crate::transformer::{KeyMap, Payload, TargetKey, Transformer};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transformer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    /// Keys expected in the incoming payload
    pub source_keys: Vec<String>,

    /// Keys to rename matched fields to, optionally `name:type` annotated
    pub target_keys: Vec<String>,

    /// Require both key lists to be the same length
    pub strict: bool,
}

impl TransformerConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// Both key lists must be non-empty, they must match in length when
    /// `strict` is set, and every type annotation must name a supported type.
    pub fn validate(&self) -> Result<()> {
        if self.source_keys.is_empty() {
            return Err(Error::Configuration {
                message: "source_keys must not be empty".to_string(),
            });
        }

        if self.target_keys.is_empty() {
            return Err(Error::Configuration {
                message: "target_keys must not be empty".to_string(),
            });
        }

        if self.strict && self.source_keys.len() != self.target_keys.len() {
            return Err(Error::Configuration {
                message: format!(
                    "strict configuration has {} source keys but {} target keys",
                    self.source_keys.len(),
                    self.target_keys.len()
                ),
            });
        }

        for raw in &self.target_keys {
            let target = TargetKey::parse(raw);
            if let Some(type_name) = target.cast {
                type_name.parse::<CastType>().map_err(|_| Error::Configuration {
                    message: format!("target key '{}' has unsupported cast type '{}'", raw, type_name),
                })?;
            }
        }

        Ok(())
    }

    /// Build the key map described by this configuration
    pub fn key_map(&self) -> KeyMap {
        KeyMap::new(
            OrderedKeySet::new(self.source_keys.iter().cloned()),
            OrderedKeySet::new(self.target_keys.iter().cloned()),
        )
        .strict(self.strict)
    }

    /// Validate the configuration and build a transformer for `payload`
    pub fn into_transformer(self, payload: Payload) -> Result<Transformer> {
        self.validate()?;
        let mut transformer = Transformer::new(payload, self.source_keys, self.target_keys);
        transformer.set_strict(self.strict);
        Ok(transformer)
    }
}
