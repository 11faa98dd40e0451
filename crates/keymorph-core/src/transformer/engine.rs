//! Stateful transformer with a cached result
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::keys::OrderedKeySet;
use crate::{Error, Result};
use super::builder::TransformerBuilder;
use super::pipeline::KeyMap;
use super::types::{KeyCorrespondence, KeyDefaults, Payload};

/// Renames payload fields according to a source/target key mapping
///
/// The transformer owns a stored payload, the key sets and the strict flag, and
/// keeps the result of the last [`transform`](Self::transform) call so it can
/// be read back with [`get_transformed_result`](Self::get_transformed_result).
///
/// # Example
///
/// ```
/// use keymorph_core::{Payload, Transformer};
/// use serde_json::json;
///
/// let payload: Payload = serde_json::from_value(json!({
///     "fname": "Jane",
///     "lname": "Doe",
///     "email": "j@x.com"
/// })).unwrap();
///
/// let mut transformer = Transformer::new(payload, ["fname", "lname"], ["first_name", "last_name"]);
/// let morphed = transformer.transform(None, false).unwrap();
///
/// assert_eq!(
///     serde_json::Value::Object(morphed),
///     json!({"first_name": "Jane", "last_name": "Doe", "email": "j@x.com"})
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    payload: Payload,
    key_map: KeyMap,
    morphed: Payload,
    transformed: bool,
}

impl Transformer {
    /// Create a transformer from a payload and the two key lists
    ///
    /// Any of the three may be empty; emptiness is only an error at transform time.
    pub fn new<S, T>(payload: Payload, source_keys: S, target_keys: T) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self::from_parts(
            payload,
            KeyMap::new(OrderedKeySet::new(source_keys), OrderedKeySet::new(target_keys)),
        )
    }

    /// Create a transformer whose key lists come from `defaults`
    pub fn with_defaults(payload: Payload, defaults: &impl KeyDefaults) -> Self {
        Self::new(payload, defaults.source_keys(), defaults.target_keys())
    }

    /// Start building a transformer
    pub fn builder() -> TransformerBuilder {
        TransformerBuilder::new()
    }

    pub(crate) fn from_parts(payload: Payload, key_map: KeyMap) -> Self {
        Self {
            payload,
            key_map,
            morphed: Payload::new(),
            transformed: false,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.key_map.strict
    }

    /// Require equal-length key sets on every transform
    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.key_map.strict = strict;
        self
    }

    /// Replace the source keys
    ///
    /// An empty list leaves the current keys in place. Replacing the keys
    /// discards the cached result.
    pub fn set_source_keys<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = OrderedKeySet::new(keys);
        if !keys.is_empty() {
            self.key_map.source_keys = keys;
            self.reset();
        }
        self
    }

    /// Replace the target keys
    ///
    /// An empty list leaves the current keys in place. Replacing the keys
    /// discards the cached result.
    pub fn set_target_keys<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = OrderedKeySet::new(keys);
        if !keys.is_empty() {
            self.key_map.target_keys = keys;
            self.reset();
        }
        self
    }

    pub fn set_payload(&mut self, payload: Payload) -> &mut Self {
        self.payload = payload;
        self
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn source_keys(&self) -> &OrderedKeySet {
        &self.key_map.source_keys
    }

    pub fn target_keys(&self) -> &OrderedKeySet {
        &self.key_map.target_keys
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Whether a transform has been attempted since construction or the last key change
    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    /// Transform a payload and cache the result
    ///
    /// A non-empty `payload` replaces the stored one; otherwise the stored
    /// payload is used. Strict mode applies if either `strict` or the instance
    /// flag is set. The transformer counts as transformed as soon as this is
    /// called, even if it then fails; on failure the cached result is empty.
    ///
    /// See [`KeyMap::apply`] for the matching rules and error conditions.
    pub fn transform(&mut self, payload: Option<Payload>, strict: bool) -> Result<Payload> {
        self.transformed = true;
        self.morphed.clear();

        if let Some(payload) = payload.filter(|p| !p.is_empty()) {
            self.payload = payload;
        }

        let morphed = self.key_map.apply(&self.payload, strict)?;
        self.morphed = morphed.clone();
        Ok(morphed)
    }

    /// Transform the stored payload with the instance strict flag
    pub fn transform_payload(&mut self) -> Result<Payload> {
        self.transform(None, false)
    }

    /// The result of the last transform
    ///
    /// # Errors
    ///
    /// [`Error::NotYetTransformed`] if no transform was attempted since
    /// construction or since the key sets were last replaced.
    pub fn get_transformed_result(&self) -> Result<&Payload> {
        if !self.transformed {
            return Err(Error::NotYetTransformed);
        }
        Ok(&self.morphed)
    }

    /// Pair each source key with the target key at the same position
    pub fn compare_keys(&self) -> KeyCorrespondence {
        self.key_map.compare_keys()
    }

    fn reset(&mut self) {
        self.transformed = false;
        self.morphed.clear();
    }
}
