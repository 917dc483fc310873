use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::{Value, ValueKind};

/// A token which could not be converted into its target kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {target}.")]
pub struct InvalidConversion {
    /// The offending raw token.
    pub token: String,
    /// The kind the token was meant to become.
    pub target: ValueKind,
}

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a raw token into a [`Value`] of the given kind.
///
/// `Nullable` kinds convert as their underlying kind.
/// Numerals are trimmed and converted without regard to locale; strings and raw tokens are passed through untouched.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{convert, Value, ValueKind};
///
/// assert_eq!(convert("-5", &ValueKind::I8).unwrap(), Value::I8(-5));
/// assert!(convert("300", &ValueKind::U8).is_err());
/// ```
pub fn convert(token: &str, kind: &ValueKind) -> Result<Value, InvalidConversion> {
    let invalid = || InvalidConversion {
        token: token.to_string(),
        target: kind.clone(),
    };

    match kind.underlying() {
        ValueKind::Bool => match token.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid()),
        },
        ValueKind::I8 => numeral(token).map(Value::I8).ok_or_else(invalid),
        ValueKind::I16 => numeral(token).map(Value::I16).ok_or_else(invalid),
        ValueKind::I32 => numeral(token).map(Value::I32).ok_or_else(invalid),
        ValueKind::I64 => numeral(token).map(Value::I64).ok_or_else(invalid),
        ValueKind::U8 => numeral(token).map(Value::U8).ok_or_else(invalid),
        ValueKind::U16 => numeral(token).map(Value::U16).ok_or_else(invalid),
        ValueKind::U32 => numeral(token).map(Value::U32).ok_or_else(invalid),
        ValueKind::U64 => numeral(token).map(Value::U64).ok_or_else(invalid),
        ValueKind::F32 => numeral::<f32>(token)
            .filter(|v| v.is_finite())
            .map(Value::F32)
            .ok_or_else(invalid),
        ValueKind::F64 => numeral::<f64>(token)
            .filter(|v| v.is_finite())
            .map(Value::F64)
            .ok_or_else(invalid),
        ValueKind::Decimal => Decimal::from_str_exact(token.trim())
            .map(Value::Decimal)
            .map_err(|_| invalid()),
        ValueKind::String => Ok(Value::String(token.to_string())),
        ValueKind::Char => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(invalid()),
            }
        }
        ValueKind::DateTime => date_time(token.trim())
            .map(Value::DateTime)
            .ok_or_else(invalid),
        ValueKind::Raw => Ok(Value::Raw(token.to_string())),
        ValueKind::Nullable(_) => {
            unreachable!("internal error - underlying kind cannot be nullable")
        }
    }
}

fn numeral<T: FromStr>(token: &str) -> Option<T> {
    T::from_str(token.trim()).ok()
}

fn date_time(token: &str) -> Option<NaiveDateTime> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(token) {
        return Some(date_time.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(token, format) {
            return Some(date_time);
        }
    }

    NaiveDate::parse_from_str(token, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
