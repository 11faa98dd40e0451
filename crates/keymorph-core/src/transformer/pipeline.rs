//! Stateless transformation over a pair of key sets
//!
//! [`KeyMap`] holds the source and target key sets and applies them to a
//! payload. It keeps no state between calls, so a single instance can be shared
//! across threads; [`Transformer`](super::Transformer) wraps it with the cached
//! result API.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::keys::OrderedKeySet;
use crate::{Error, KeyRole, Result};
use super::types::{KeyCorrespondence, Payload, TargetKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Source keys, positionally paired target keys and the strict flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    /// Keys expected in the incoming payload
    pub source_keys: OrderedKeySet,
    /// Keys to rename matched fields to, optionally `name:type` annotated
    pub target_keys: OrderedKeySet,
    /// Require both key sets to be the same length
    #[serde(default)]
    pub strict: bool,
}

impl KeyMap {
    /// Create a non-strict key map
    pub fn new(source_keys: impl Into<OrderedKeySet>, target_keys: impl Into<OrderedKeySet>) -> Self {
        Self {
            source_keys: source_keys.into(),
            target_keys: target_keys.into(),
            strict: false,
        }
    }

    /// Set the strict flag
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check that both key sets are usable, honouring `strict` or `self.strict`
    pub fn check(&self, strict: bool) -> Result<()> {
        if self.source_keys.is_empty() {
            return Err(Error::MissingKeyDefinition { role: KeyRole::Source });
        }
        if self.target_keys.is_empty() {
            return Err(Error::MissingKeyDefinition { role: KeyRole::Target });
        }
        if (self.strict || strict) && !self.source_keys.same_len_as(&self.target_keys) {
            return Err(Error::KeyLengthMismatch {
                source_len: self.source_keys.len(),
                target_len: self.target_keys.len(),
            });
        }
        Ok(())
    }

    /// Rename (and cast) the fields of `payload`
    ///
    /// Fields whose key appears in the source keys are stored under the target
    /// key at the same position, cast when the target key carries a type
    /// annotation. Every other field passes through unchanged. Entries are
    /// visited in payload order, so a later entry overwrites an earlier one that
    /// lands on the same output key.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingPayload`] if `payload` is empty
    /// - [`Error::MissingKeyDefinition`] if either key set is empty
    /// - [`Error::KeyLengthMismatch`] if strict and the key sets differ in length
    /// - [`Error::OutOfRange`] if a matched source key has no target at its position
    /// - [`Error::InvalidCastInput`] if an annotated value cannot be cast
    pub fn apply(&self, payload: &Payload, strict: bool) -> Result<Payload> {
        if payload.is_empty() {
            return Err(Error::MissingPayload);
        }
        self.check(strict)?;

        debug!(
            fields = payload.len(),
            source_keys = self.source_keys.len(),
            target_keys = self.target_keys.len(),
            strict = self.strict || strict,
            "Transforming payload"
        );

        let mut morphed = Payload::with_capacity(payload.len());
        for (key, value) in payload {
            let Some(position) = self.source_keys.position_of(key) else {
                morphed.insert(key.clone(), value.clone());
                continue;
            };

            let target = TargetKey::parse(self.target_keys.get(position)?);
            let output = match target.cast_type()? {
                Some(cast_type) => {
                    trace!(from = %key, to = target.name, cast = %cast_type, "Renaming field with cast");
                    cast_type.cast(value)?
                }
                None => {
                    trace!(from = %key, to = target.name, "Renaming field");
                    value.clone()
                }
            };
            morphed.insert(target.name.to_string(), output);
        }

        debug!(fields = morphed.len(), "Payload transformed");
        Ok(morphed)
    }

    /// Pair each source key with the target key at the same position
    pub fn compare_keys(&self) -> KeyCorrespondence {
        let mut correspondence = KeyCorrespondence::default();
        for (index, source) in self.source_keys.iter().enumerate() {
            correspondence.push(source, self.target_keys.get(index).ok());
        }
        correspondence
    }
}

/// Transform `payload` in one call, without a [`Transformer`](super::Transformer)
///
/// # Example
///
/// ```
/// use keymorph_core::{morph, Payload};
/// use serde_json::json;
///
/// let payload: Payload = serde_json::from_value(json!({"age": "30", "city": "Accra"})).unwrap();
/// let morphed = morph(&payload, ["age"], ["years:integer"], false).unwrap();
/// assert_eq!(serde_json::Value::Object(morphed), json!({"years": 30, "city": "Accra"}));
/// ```
pub fn morph<S, T>(payload: &Payload, source_keys: S, target_keys: T, strict: bool) -> Result<Payload>
where
    S: IntoIterator,
    S::Item: Into<String>,
    T: IntoIterator,
    T::Item: Into<String>,
{
    KeyMap::new(
        OrderedKeySet::new(source_keys),
        OrderedKeySet::new(target_keys),
    )
    .apply(payload, strict)
}
