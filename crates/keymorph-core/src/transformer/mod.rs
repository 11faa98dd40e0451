//! Key transformation system for renaming payload fields
//!
//! A transformation pairs an ordered list of source keys with an ordered list of
//! target keys by position. Fields of the payload whose key is a source key are
//! renamed to the target key at the same position, and cast when the target key
//! carries a `name:type` annotation. All other fields pass through unchanged.
//!
//! # Module Organization
//!
//! - [`types`] - Payload alias, target key annotations and default-key strategies
//! - [`pipeline`] - The stateless [`KeyMap`] and the [`morph`] entry point
//! - [`engine`] - The stateful [`Transformer`] with its cached result
//! - [`builder`] - Fluent builder API for creating transformers
//!
//! # Examples
//!
//! ## Rename with a cast
//!
//! ```
//! use keymorph_core::{Payload, Transformer};
//! use serde_json::json;
//!
//! let payload: Payload = serde_json::from_value(json!({"age": "30"})).unwrap();
//! let mut transformer = Transformer::new(payload, ["age"], ["age:integer"]);
//!
//! let morphed = transformer.transform(None, false).unwrap();
//! assert_eq!(morphed["age"], json!(30));
//! ```
//!
//! ## Injected default keys
//!
//! ```
//! use keymorph_core::{KeyDefaults, Payload, Transformer};
//! use serde_json::json;
//!
//! struct UserFields;
//!
//! impl KeyDefaults for UserFields {
//!     fn source_keys(&self) -> Vec<String> {
//!         vec!["fname".into(), "lname".into()]
//!     }
//!
//!     fn target_keys(&self) -> Vec<String> {
//!         vec!["first_name".into(), "last_name".into()]
//!     }
//! }
//!
//! let payload: Payload = serde_json::from_value(json!({"fname": "Jane"})).unwrap();
//! let mut transformer = Transformer::builder()
//!     .payload(payload)
//!     .defaults(UserFields)
//!     .strict(true)
//!     .build();
//!
//! assert_eq!(transformer.transform_payload().unwrap()["first_name"], json!("Jane"));
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod types;

pub mod pipeline;

pub mod engine;

pub mod builder;


pub use types::{
    KeyCorrespondence, KeyDefaults, KeyProvider, Payload, TargetKey, TYPE_DELIMITER,
};

pub use pipeline::{morph, KeyMap};
pub use engine::Transformer;
pub use builder::TransformerBuilder;
