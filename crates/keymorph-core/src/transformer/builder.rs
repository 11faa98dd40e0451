//! Builder for creating transformers
//!
//! This module provides a fluent builder API for constructing a [`Transformer`]
//! with injected default key providers.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::keys::OrderedKeySet;
use super::engine::Transformer;
use super::pipeline::KeyMap;
use super::types::{KeyDefaults, KeyProvider, Payload};
use std::sync::Arc;

/// Builder for creating transformers
///
/// For each side, explicit keys win; if none were given the default provider
/// is asked; without a provider the key set stays empty.
#[derive(Default)]
pub struct TransformerBuilder {
    payload: Payload,
    source_keys: Vec<String>,
    target_keys: Vec<String>,
    strict: bool,
    default_source_keys: Option<KeyProvider>,
    default_target_keys: Option<KeyProvider>,
}

impl TransformerBuilder {
    /// Create a new transformer builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Set the source keys
    pub fn source_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the target keys
    pub fn target_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the strict flag
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Provider used when no source keys are set
    pub fn default_source_keys<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static,
    {
        self.default_source_keys = Some(Box::new(provider));
        self
    }

    /// Provider used when no target keys are set
    pub fn default_target_keys<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static,
    {
        self.default_target_keys = Some(Box::new(provider));
        self
    }

    /// Use both default providers of a [`KeyDefaults`] implementation
    pub fn defaults<D>(self, defaults: D) -> Self
    where
        D: KeyDefaults + Send + Sync + 'static,
    {
        let defaults = Arc::new(defaults);
        let for_targets = Arc::clone(&defaults);
        self.default_source_keys(move || defaults.source_keys())
            .default_target_keys(move || for_targets.target_keys())
    }

    /// Build the transformer
    pub fn build(self) -> Transformer {
        let source_keys = resolve_keys(self.source_keys, self.default_source_keys.as_ref());
        let target_keys = resolve_keys(self.target_keys, self.default_target_keys.as_ref());

        Transformer::from_parts(
            self.payload,
            KeyMap::new(source_keys, target_keys).strict(self.strict),
        )
    }
}

fn resolve_keys(explicit: Vec<String>, provider: Option<&KeyProvider>) -> OrderedKeySet {
    if !explicit.is_empty() {
        return OrderedKeySet::from(explicit);
    }
    provider.map(|p| OrderedKeySet::from(p())).unwrap_or_default()
}
