//! Type casting for annotated target keys
//!
//! A target key such as `"age:integer"` asks for the renamed value to be cast.
//! This module owns the closed set of supported type names ([`CastType`]) and
//! the conversions themselves. Casting is pure: nothing is logged here, and
//! every unsupported input is reported as [`Error::InvalidCastInput`].
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// Naive date-time layouts tried after RFC 3339, interpreted as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Supported cast targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastType {
    Integer,
    String,
    /// `float` and `double` are synonyms
    Float,
    Bool,
    Array,
    DateTime,
}

impl CastType {
    /// Every supported type, in declaration order
    pub const ALL: [CastType; 6] = [
        CastType::Integer,
        CastType::String,
        CastType::Float,
        CastType::Bool,
        CastType::Array,
        CastType::DateTime,
    ];

    /// Canonical type name as written in a target key annotation
    pub fn as_str(&self) -> &'static str {
        match self {
            CastType::Integer => "integer",
            CastType::String => "string",
            CastType::Float => "float",
            CastType::Bool => "bool",
            CastType::Array => "array",
            CastType::DateTime => "dateTime",
        }
    }

    /// Cast `value` to this type
    pub fn cast(&self, value: &Value) -> Result<Value> {
        if value.is_null() {
            return Err(Error::invalid_cast(
                self.as_str(),
                "a value is needed for casting, got null",
            ));
        }

        match self {
            CastType::Integer => to_integer(value),
            CastType::String => to_string(value),
            CastType::Float => to_float(value),
            CastType::Bool => to_bool(value),
            CastType::Array => Ok(to_array(value)),
            CastType::DateTime => parse_datetime(value).map(|dt| Value::String(dt.to_rfc3339())),
        }
    }
}

impl FromStr for CastType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(Error::invalid_cast(s, "a type to cast the value to is needed, none given"));
        }

        match name.to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(CastType::Integer),
            "string" => Ok(CastType::String),
            "float" | "double" => Ok(CastType::Float),
            "bool" | "boolean" => Ok(CastType::Bool),
            "array" => Ok(CastType::Array),
            "datetime" => Ok(CastType::DateTime),
            _ => Err(Error::invalid_cast(s, "unsupported cast type")),
        }
    }
}

impl fmt::Display for CastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cast `value` to the type named by `type_name`
///
/// # Errors
///
/// Returns [`Error::InvalidCastInput`] when the value is null, when the type name
/// is empty or not supported, or when the value cannot be represented in the
/// requested type (for example `"abc"` as an integer).
///
/// # Example
///
/// ```
/// use keymorph_core::cast;
/// use serde_json::json;
///
/// assert_eq!(cast(&json!("42"), "integer").unwrap(), json!(42));
/// assert!(cast(&json!(null), "integer").is_err());
/// ```
pub fn cast(value: &Value, type_name: &str) -> Result<Value> {
    type_name.parse::<CastType>()?.cast(value)
}

/// Parse a value into a UTC timestamp
///
/// Strings are tried as RFC 3339 first, then as naive `YYYY-MM-DD HH:MM:SS`
/// (space or `T` separated) and finally as a bare `YYYY-MM-DD` date at
/// midnight. Integers are Unix timestamps in seconds.
pub fn parse_datetime(value: &Value) -> Result<DateTime<Utc>> {
    let type_name = CastType::DateTime.as_str();
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(dt.with_timezone(&Utc));
            }
            for format in NAIVE_DATETIME_FORMATS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                    return Ok(naive.and_utc());
                }
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
                .ok_or_else(|| Error::invalid_cast(type_name, format!("cannot parse '{}' as a date-time", s)))
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .ok_or_else(|| Error::invalid_cast(type_name, format!("{} is not a valid Unix timestamp", n))),
        Value::Null => Err(Error::invalid_cast(type_name, "a value is needed for casting, got null")),
        other => Err(Error::invalid_cast(type_name, format!("cannot convert {} to a date-time", kind_of(other)))),
    }
}

fn to_integer(value: &Value) -> Result<Value> {
    let type_name = CastType::Integer.as_str();
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Value::Number(n.clone())),
        Value::Number(n) => n
            .as_f64()
            .and_then(truncate_to_i64)
            .map(Value::from)
            .ok_or_else(|| Error::invalid_cast(type_name, format!("{} does not fit in an integer", n))),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(Value::from(i));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(truncate_to_i64)
                .map(Value::from)
                .ok_or_else(|| Error::invalid_cast(type_name, format!("'{}' is not numeric", s)))
        }
        Value::Bool(b) => Ok(Value::from(i64::from(*b))),
        other => Err(Error::invalid_cast(type_name, format!("cannot convert {} to an integer", kind_of(other)))),
    }
}

fn truncate_to_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

fn to_float(value: &Value) -> Result<Value> {
    let type_name = CastType::Float.as_str();
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        other => {
            return Err(Error::invalid_cast(type_name, format!("cannot convert {} to a float", kind_of(other))));
        }
    };

    parsed
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| Error::invalid_cast(type_name, format!("{} is not a finite number", value)))
}

fn to_string(value: &Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        other => Err(Error::invalid_cast(
            CastType::String.as_str(),
            format!("cannot convert {} to a string", kind_of(other)),
        )),
    }
}

fn to_bool(value: &Value) -> Result<Value> {
    let result = match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => true,
            "false" | "no" | "0" | "off" | "" => false,
            _ => {
                return Err(Error::invalid_cast(
                    CastType::Bool.as_str(),
                    format!("'{}' is not a recognised boolean", s),
                ));
            }
        },
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Null => false,
    };
    Ok(Value::Bool(result))
}

fn to_array(value: &Value) -> Value {
    match value {
        Value::Array(_) => value.clone(),
        Value::Object(map) => Value::Array(map.values().cloned().collect()),
        scalar => Value::Array(vec![scalar.clone()]),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
