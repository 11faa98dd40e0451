//! Core types for the key transformation system
//!
//! This module defines the payload alias, target key annotations, the key
//! correspondence report and the injectable default-key strategies.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::caster::CastType;
use crate::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// A flat payload: field name to dynamic value, iterated in insertion order
pub type Payload = Map<String, Value>;

/// Separates an output key name from its cast type in a target key
pub const TYPE_DELIMITER: char = ':';

/// A target key split into its output name and optional cast type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetKey<'a> {
    /// Name the value is stored under in the morphed payload
    pub name: &'a str,
    /// Type name to cast the value to, when annotated
    pub cast: Option<&'a str>,
}

impl<'a> TargetKey<'a> {
    /// Split a raw target key on the first [`TYPE_DELIMITER`]
    ///
    /// A delimiter in the first position does not count as an annotation, so
    /// `":id"` is a plain key named `":id"`.
    pub fn parse(raw: &'a str) -> Self {
        match raw.find(TYPE_DELIMITER) {
            Some(pos) if pos > 0 => Self {
                name: &raw[..pos],
                cast: Some(&raw[pos + TYPE_DELIMITER.len_utf8()..]),
            },
            _ => Self { name: raw, cast: None },
        }
    }

    pub fn has_cast(&self) -> bool {
        self.cast.is_some()
    }

    /// Resolve the annotation to a [`CastType`], if there is one
    pub fn cast_type(&self) -> Result<Option<CastType>> {
        self.cast.map(str::parse::<CastType>).transpose()
    }
}

/// Supplies default key lists when none are given explicitly
///
/// Implement this for a payload shape that always uses the same field lists
/// and hand it to [`Transformer::with_defaults`](super::Transformer::with_defaults)
/// or [`TransformerBuilder::defaults`](super::TransformerBuilder::defaults).
pub trait KeyDefaults {
    /// Keys expected in the incoming payload
    fn source_keys(&self) -> Vec<String> {
        Vec::new()
    }

    /// Keys the matched fields are renamed to
    fn target_keys(&self) -> Vec<String> {
        Vec::new()
    }
}

/// A callback producing a default key list
pub type KeyProvider = Box<dyn Fn() -> Vec<String> + Send + Sync>;

/// Positional pairing of source keys to target keys
///
/// Built by [`KeyMap::compare_keys`](super::KeyMap::compare_keys). Each source key
/// appears once, at its first position; `None` marks a source key with no target
/// at that position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCorrespondence {
    pairs: Vec<(String, Option<String>)>,
}

impl KeyCorrespondence {
    pub(crate) fn push(&mut self, source: &str, target: Option<&str>) {
        if !self.contains(source) {
            self.pairs.push((source.to_string(), target.map(str::to_string)));
        }
    }

    pub fn contains(&self, source: &str) -> bool {
        self.pairs.iter().any(|(s, _)| s == source)
    }

    /// Target paired with `source`
    ///
    /// The outer `Option` is `None` when `source` is not a source key at all,
    /// the inner one when it has no target.
    pub fn get(&self, source: &str) -> Option<Option<&str>> {
        self.pairs
            .iter()
            .find(|(s, _)| s == source)
            .map(|(_, t)| t.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.pairs.iter().map(|(s, t)| (s.as_str(), t.as_deref()))
    }

    /// Source keys without a positional target
    pub fn unmatched(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().filter(|(_, t)| t.is_none()).map(|(s, _)| s)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Serialize for KeyCorrespondence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (source, target) in &self.pairs {
            map.serialize_entry(source, target)?;
        }
        map.end()
    }
}
