//! Keymorph Core - Positional key renaming for flat JSON payloads
//!
//! This crate renames the fields of a flat payload according to a pair of
//! ordered key lists, optionally casting the renamed values to a declared type.
//!
//! # Main Components
//!
//! - **Error Handling**: A single error enum built with `thiserror`
//! - **Key Sets**: [`OrderedKeySet`], positional lookups over key names
//! - **Type Casting**: [`CastType`] and [`cast`] for `name:type` annotated keys
//! - **Transformation**: [`KeyMap`] (stateless) and [`Transformer`] (cached result)
//! - **Configuration**: [`TransformerConfig`], serde-backed key mapping documents
//!
//! # Example
//!
//! ```
//! use keymorph_core::{Payload, Result, Transformer};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let payload: Payload = serde_json::from_value(json!({"age": "30", "city": "Accra"}))?;
//!     let mut transformer = Transformer::new(payload, ["age"], ["age:integer"]);
//!     transformer.set_strict(true);
//!
//!     let morphed = transformer.transform(None, false)?;
//!     assert_eq!(morphed["age"], json!(30));
//!     assert_eq!(morphed["city"], json!("Accra"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod caster;
pub mod config;
pub mod error;
pub mod keys;
pub mod transformer;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use caster::{cast, parse_datetime, CastType};
pub use config::TransformerConfig;
pub use error::{Error, ErrorKind, KeyRole, Result};
pub use keys::OrderedKeySet;
pub use transformer::{
    morph, KeyCorrespondence, KeyDefaults, KeyMap, KeyProvider, Payload, TargetKey,
    Transformer, TransformerBuilder, TYPE_DELIMITER,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
