//! Coerce semi-structured model output into competitor records.
//!
//! The model is asked for a strict schema but rarely honours it exactly.
//! Each raw record is mapped field by field: the name is required, counts
//! tolerate floats and numeric strings, and prices map the `-1` marker
//! (and other placeholders) to [`Price::Unknown`]. Records that cannot be
//! coerced are dropped with a warning rather than propagated.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Number, Value};
use tracing::warn;

use super::config::NegativePricePolicy;
use crate::domain::{CompetitorRecord, DomainError, GeographicFocus, Price};

const NAME: &str = "dsoName";
const FOCUS: &str = "geographicFocus";
const CLINICS: &str = "clinicCount";
const DENTISTS: &str = "dentistCount";
const SURGEONS: &str = "surgeonCount";
const PRICE_DENTURE: &str = "priceDenture";
const PRICE_TIER1_LOW: &str = "priceTier1Low";
const PRICE_TIER1_HIGH: &str = "priceTier1High";

/// Normalize a parsed payload into records.
///
/// Accepts an array of objects, or an object wrapping such an array under
/// any key. When several keys hold object arrays, the one whose objects
/// carry a `dsoName` wins. Anything else yields no records.
#[must_use]
pub fn normalize_records(payload: &Value, policy: NegativePricePolicy) -> Vec<CompetitorRecord> {
    let Some(items) = record_array(payload) else {
        warn!(kind = value_kind(payload), "Payload holds no record array");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match normalize_record(item, policy) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "Dropping malformed record");
                None
            }
        })
        .collect()
}

/// Normalize one raw record.
///
/// Any supplied `dentistsPerClinic` is ignored; the ratio is always
/// derived from the counts.
///
/// # Errors
///
/// Returns a [`DomainError`] when the name is missing or empty, the record
/// is not an object, a count is negative or non-numeric, or a negative price
/// meets [`NegativePricePolicy::Reject`].
pub fn normalize_record(
    item: &Value,
    policy: NegativePricePolicy,
) -> Result<CompetitorRecord, DomainError> {
    let fields = item
        .as_object()
        .ok_or(DomainError::MissingField { field: NAME })?;

    let name = match fields.get(NAME) {
        Some(Value::String(name)) => name.as_str(),
        Some(Value::Null) | None => return Err(DomainError::MissingField { field: NAME }),
        Some(other) => {
            return Err(DomainError::InvalidType {
                field: NAME,
                value: other.to_string(),
            })
        }
    };
    let focus = match fields.get(FOCUS) {
        Some(Value::String(label)) => GeographicFocus::parse(label),
        _ => GeographicFocus::Unspecified,
    };

    let record = CompetitorRecord::try_new(name, focus)?
        .with_counts(
            count(fields, CLINICS)?,
            count(fields, DENTISTS)?,
            count(fields, SURGEONS)?,
        )
        .with_prices(
            price(fields, PRICE_DENTURE, policy)?,
            price(fields, PRICE_TIER1_LOW, policy)?,
            price(fields, PRICE_TIER1_HIGH, policy)?,
        );
    Ok(record)
}

fn record_array(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(fields) => {
            let arrays: Vec<&Vec<Value>> = fields
                .values()
                .filter_map(|v| match v {
                    Value::Array(items) if items.iter().any(Value::is_object) => Some(items),
                    _ => None,
                })
                .collect();
            arrays
                .iter()
                .find(|items| items.iter().any(|item| item.get(NAME).is_some()))
                .or_else(|| arrays.first())
                .copied()
        }
        _ => None,
    }
}

fn count(fields: &Map<String, Value>, field: &'static str) -> Result<u32, DomainError> {
    let Some(value) = fields.get(field) else {
        return Ok(0);
    };
    let invalid = || DomainError::InvalidCount {
        field,
        value: value.to_string(),
    };

    let amount = match value {
        Value::Null => return Ok(0),
        Value::Number(n) => decimal(n),
        Value::String(s) => parse_amount(s),
        _ => None,
    }
    .ok_or_else(invalid)?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid());
    }
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .ok_or_else(invalid)
}

fn price(
    fields: &Map<String, Value>,
    field: &'static str,
    policy: NegativePricePolicy,
) -> Result<Price, DomainError> {
    let amount = match fields.get(field) {
        Some(Value::Number(n)) => decimal(n),
        Some(Value::String(s)) => parse_amount(s),
        _ => None,
    };

    match amount {
        None => Ok(Price::Unknown),
        Some(amount) if amount == Decimal::NEGATIVE_ONE => Ok(Price::Unknown),
        Some(amount) => match Price::try_known(amount, field) {
            Ok(price) => Ok(price),
            Err(e) => match policy {
                NegativePricePolicy::Unknown => {
                    warn!(field, %amount, "Negative price treated as unknown");
                    Ok(Price::Unknown)
                }
                NegativePricePolicy::Reject => Err(e),
            },
        },
    }
}

fn decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    n.as_f64().and_then(Decimal::from_f64)
}

/// Parse a numeric string, tolerating a currency sign and digit grouping.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    cleaned.parse().ok()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
