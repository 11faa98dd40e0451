//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! payloads and key sets for property testing.

#![cfg(test)]

use crate::caster::CastType;
use crate::keys::OrderedKeySet;
use crate::transformer::Payload;
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for generating field names
pub fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

/// Strategy for generating scalar JSON values
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Strategy for generating flat payloads
pub fn payload_strategy() -> impl Strategy<Value = Payload> {
    btree_map(key_strategy(), scalar_strategy(), 1..12)
        .prop_map(|fields| fields.into_iter().collect())
}

/// Strategy for generating key sets (duplicates allowed)
pub fn key_set_strategy() -> impl Strategy<Value = OrderedKeySet> {
    vec(key_strategy(), 1..8).prop_map(OrderedKeySet::from)
}

/// Strategy for generating cast types
pub fn cast_type_strategy() -> impl Strategy<Value = CastType> {
    prop_oneof![
        Just(CastType::Integer),
        Just(CastType::String),
        Just(CastType::Float),
        Just(CastType::Bool),
        Just(CastType::Array),
        Just(CastType::DateTime),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformer::KeyMap;
    use crate::ErrorKind;

    proptest! {
        #[test]
        fn transform_is_deterministic(
            payload in payload_strategy(),
            source in key_set_strategy(),
            target in key_set_strategy(),
        ) {
            let key_map = KeyMap::new(source, target);
            let first = key_map.apply(&payload, false).map_err(|e| e.kind());
            let second = key_map.apply(&payload, false).map_err(|e| e.kind());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn unmatched_keys_pass_through(
            payload in payload_strategy(),
            source in key_set_strategy(),
        ) {
            // Targets never collide with payload keys (those are lowercase)
            let target = OrderedKeySet::new((0..source.len()).map(|i| format!("T{}", i)));
            let key_map = KeyMap::new(source.clone(), target);

            let morphed = key_map.apply(&payload, true).unwrap();
            for (key, value) in &payload {
                if !source.contains(key) {
                    prop_assert_eq!(morphed.get(key), Some(value));
                } else {
                    prop_assert!(!morphed.contains_key(key));
                }
            }
        }

        #[test]
        fn strict_rejects_unequal_lengths(
            payload in payload_strategy(),
            source in key_set_strategy(),
            target in key_set_strategy(),
        ) {
            prop_assume!(source.len() != target.len());
            let err = KeyMap::new(source, target).apply(&payload, true).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::KeyLengthMismatch);
        }

        #[test]
        fn null_never_casts(cast_type in cast_type_strategy()) {
            let err = cast_type.cast(&Value::Null).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidCastInput);
        }

        #[test]
        fn integer_strings_cast_to_integers(n in any::<i64>()) {
            let cast = CastType::Integer.cast(&Value::String(n.to_string())).unwrap();
            prop_assert_eq!(cast, Value::from(n));
        }
    }
}
