//! End-to-end tests for the key transformation engine


use keymorph_core::{
    cast, morph, Error, ErrorKind, Transformer, TransformerConfig,
};
use serde_json::{json, Value};
use test_support::{payload, transform_value, UserForm};

#[test]
fn test_rename_user_fields() {
    let mut transformer = Transformer::new(
        payload(json!({"fname": "Jane", "lname": "Doe", "email": "j@x.com"})),
        ["fname", "lname"],
        ["first_name", "last_name"],
    );

    let morphed = transform_value(&mut transformer).unwrap();
    assert_eq!(
        morphed,
        json!({"first_name": "Jane", "last_name": "Doe", "email": "j@x.com"})
    );
}

#[test]
fn test_cast_age_to_integer() {
    let mut transformer = Transformer::new(payload(json!({"age": "30"})), ["age"], ["age:integer"]);

    let morphed = transform_value(&mut transformer).unwrap();
    assert_eq!(morphed, json!({"age": 30}));
    assert!(morphed["age"].is_i64());
}

#[test]
fn test_strict_length_mismatch() {
    let mut transformer = Transformer::new(payload(json!({"a": 1})), ["a", "b"], ["x"]);
    transformer.set_strict(true);

    let err = transformer.transform(None, false).unwrap_err();
    assert!(matches!(err, Error::KeyLengthMismatch { source_len: 2, target_len: 1 }));
}

#[test]
fn test_cast_null_value() {
    let err = cast(&Value::Null, "integer").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCastInput);
}

#[test]
fn test_user_form_defaults() {
    let mut transformer = Transformer::builder()
        .payload(payload(json!({
            "fname": "Kofi",
            "lname": "Mensah",
            "age": "41",
            "subscribed": "yes",
            "joined": "2023-11-05 09:30:00",
            "referrer": null
        })))
        .defaults(UserForm)
        .strict(true)
        .build();

    let morphed = transform_value(&mut transformer).unwrap();
    assert_eq!(
        morphed,
        json!({
            "first_name": "Kofi",
            "last_name": "Mensah",
            "age": 41,
            "newsletter": true,
            "joined_at": "2023-11-05T09:30:00+00:00",
            "referrer": null
        })
    );
    assert_eq!(
        Value::Object(transformer.get_transformed_result().unwrap().clone()),
        morphed
    );
}

#[test]
fn test_reuse_transformer_across_payloads() {
    let mut transformer = Transformer::with_defaults(Default::default(), &UserForm);

    let first = transformer
        .transform(Some(payload(json!({"fname": "Ama"}))), true)
        .unwrap();
    let second = transformer
        .transform(Some(payload(json!({"lname": "Owusu"}))), true)
        .unwrap();

    assert_eq!(Value::Object(first), json!({"first_name": "Ama"}));
    assert_eq!(Value::Object(second), json!({"last_name": "Owusu"}));
}

#[test]
fn test_config_driven_transform() {
    let config = TransformerConfig::from_json_str(
        r#"{
            "source_keys": ["sku", "price", "tags"],
            "target_keys": ["product_id:string", "unit_price:double", "labels:array"],
            "strict": true
        }"#,
    )
    .unwrap();

    let mut transformer = config
        .into_transformer(payload(json!({"sku": 1001, "price": "12.50", "tags": "sale"})))
        .unwrap();

    assert_eq!(
        transform_value(&mut transformer).unwrap(),
        json!({"product_id": "1001", "unit_price": 12.5, "labels": ["sale"]})
    );
}

#[test]
fn test_compare_keys_matches_transform() {
    let transformer = Transformer::new(
        payload(json!({"a": 1, "b": 2})),
        ["a", "b", "c"],
        ["x", "y:integer"],
    );

    let correspondence = transformer.compare_keys();
    assert_eq!(
        serde_json::to_value(&correspondence).unwrap(),
        json!({"a": "x", "b": "y:integer", "c": null})
    );

    // "c" has no target, so a payload carrying it cannot be transformed
    let err = morph(&payload(json!({"c": 3})), ["a", "b", "c"], ["x", "y:integer"], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_unknown_cast_type_fails_loudly() {
    let err = morph(&payload(json!({"n": "1"})), ["n"], ["n:decimal"], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCastInput);
    assert!(err.to_string().contains("decimal"));
}

#[test]
fn test_transform_with_question_mark() -> anyhow::Result<()> {
    use anyhow::Context;

    let config = TransformerConfig::from_value(json!({
        "source_keys": ["active"],
        "target_keys": ["enabled:bool"]
    }))
    .context("config should parse")?;

    let mut transformer = config.into_transformer(payload(json!({"active": 1, "id": 9})))?;
    let morphed = transform_value(&mut transformer).context("transform should succeed")?;

    assert_eq!(morphed, json!({"enabled": true, "id": 9}));
    Ok(())
}
