//! Forgiving field decoders for records read from the employee store.
//!
//! The store is filled by hand-edited forms, so numbers may arrive as JSON
//! numbers, numeric strings, empty strings or garbage. Anything that does not
//! read as a value is treated as absent instead of failing the whole record.

use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::calculation::parse_time_of_day;

fn decimal_from_value(value: Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => {
            let text = text.trim();
            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .ok()
        }
        _ => None,
    }
}

/// Decodes an optional decimal, mapping unreadable input to `None`.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(decimal_from_value))
}

/// Decodes a decimal, mapping unreadable input to zero.
pub(crate) fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(decimal(deserializer)?.unwrap_or(Decimal::ZERO))
}

/// `HH:MM` encoding for optional times of day.
pub(crate) mod time_of_day {
    use super::*;

    pub(crate) fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.serialize_str(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(text)) if !text.trim().is_empty() => {
                parse_time_of_day(&text).ok()
            }
            _ => None,
        })
    }
}
