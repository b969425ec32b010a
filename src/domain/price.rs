//! Price points with an explicit "unknown" placeholder.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::error::DomainError;

/// Label rendered for prices with no reliable figure.
pub const UNKNOWN_PRICE_LABEL: &str = "TBD";

/// A price in unscaled currency units, or the `Unknown` placeholder.
///
/// `Unknown` is distinct from zero: it means no reliable figure exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// A non-negative amount.
    Known(Decimal),
    /// No reliable figure available.
    Unknown,
}

impl Price {
    /// Create a known price, rejecting negative amounts.
    pub fn try_known(amount: Decimal, field: &'static str) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativePrice {
                field,
                value: amount.to_string(),
            });
        }
        Ok(Self::Known(amount))
    }

    /// Create a known price from a whole amount.
    #[must_use]
    pub fn whole(amount: u32) -> Self {
        Self::Known(Decimal::from(amount))
    }

    /// The amount, if known.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Known(amount) => Some(*amount),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(amount) => write!(f, "${}", amount.normalize()),
            Self::Unknown => f.write_str(UNKNOWN_PRICE_LABEL),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown => serializer.serialize_str(UNKNOWN_PRICE_LABEL),
            Self::Known(amount) => serialize_amount(*amount, serializer),
        }
    }
}

/// Serialize a decimal as a JSON integer when whole, else as a float.
pub(crate) fn serialize_amount<S: Serializer>(
    amount: Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if amount.fract().is_zero() {
        if let Some(whole) = amount.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    serializer.serialize_f64(amount.to_f64().unwrap_or_default())
}
