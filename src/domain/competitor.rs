//! Competitor records, the canonical unit of the market matrix.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::error::DomainError;
use super::price::Price;

/// Geographic reach of a competitor within the analysed region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeographicFocus {
    National,
    Regional,
    Local,
    /// A label outside the closed set, kept verbatim.
    Other(String),
    /// No label supplied.
    #[default]
    Unspecified,
}

impl GeographicFocus {
    /// Parse a free-form label, case-insensitively.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Self::Unspecified,
            "national" => Self::National,
            "regional" => Self::Regional,
            "local" => Self::Local,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for GeographicFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::National => f.write_str("National"),
            Self::Regional => f.write_str("Regional"),
            Self::Local => f.write_str("Local"),
            Self::Other(label) => f.write_str(label),
            Self::Unspecified => f.write_str("Unspecified"),
        }
    }
}

impl Serialize for GeographicFocus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One competitor in a market matrix.
///
/// The organization name is validated at construction and never empty.
/// Dentists-per-clinic is not stored; it is derived from the counts on
/// every read so it cannot drift from them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorRecord {
    organization_name: String,
    pub geographic_focus: GeographicFocus,
    pub clinic_count: u32,
    pub dentist_count: u32,
    pub surgeon_count: u32,
    pub price_economy_denture: Price,
    pub price_tier1_low: Price,
    pub price_tier1_high: Price,
}

impl CompetitorRecord {
    /// Create a record with zero counts and unknown prices.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyOrganizationName`] if the trimmed name is empty.
    pub fn try_new(
        organization_name: impl Into<String>,
        geographic_focus: GeographicFocus,
    ) -> Result<Self, DomainError> {
        let organization_name = organization_name.into().trim().to_string();
        if organization_name.is_empty() {
            return Err(DomainError::EmptyOrganizationName);
        }
        Ok(Self {
            organization_name,
            geographic_focus,
            clinic_count: 0,
            dentist_count: 0,
            surgeon_count: 0,
            price_economy_denture: Price::Unknown,
            price_tier1_low: Price::Unknown,
            price_tier1_high: Price::Unknown,
        })
    }

    /// Set clinic, dentist and surgeon counts.
    #[must_use]
    pub fn with_counts(mut self, clinics: u32, dentists: u32, surgeons: u32) -> Self {
        self.clinic_count = clinics;
        self.dentist_count = dentists;
        self.surgeon_count = surgeons;
        self
    }

    /// Set the economy-denture and tier 1 low/high prices.
    #[must_use]
    pub fn with_prices(mut self, economy_denture: Price, tier1_low: Price, tier1_high: Price) -> Self {
        self.price_economy_denture = economy_denture;
        self.price_tier1_low = tier1_low;
        self.price_tier1_high = tier1_high;
        self
    }

    #[must_use]
    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    /// Dentists per clinic, rounded to two decimals; zero without clinics.
    #[must_use]
    pub fn dentists_per_clinic(&self) -> Decimal {
        dentists_per_clinic(self.dentist_count, self.clinic_count)
    }

    /// Known, non-zero prices with their display labels.
    #[must_use]
    pub fn price_points(&self) -> Vec<(&'static str, Decimal)> {
        [
            ("Economy Denture", self.price_economy_denture),
            ("Tier 1 (Low)", self.price_tier1_low),
            ("Tier 1 (High)", self.price_tier1_high),
        ]
        .into_iter()
        .filter_map(|(label, price)| price.amount().map(|amount| (label, amount)))
        .filter(|(_, amount)| !amount.is_zero())
        .collect()
    }
}

/// Ratio of dentists to clinics, rounded half away from zero to 2 places.
#[must_use]
pub fn dentists_per_clinic(dentists: u32, clinics: u32) -> Decimal {
    if clinics == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(dentists) / Decimal::from(clinics))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl Serialize for CompetitorRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CompetitorRecord", 9)?;
        state.serialize_field("dsoName", &self.organization_name)?;
        state.serialize_field("geographicFocus", &self.geographic_focus)?;
        state.serialize_field("clinicCount", &self.clinic_count)?;
        state.serialize_field("dentistCount", &self.dentist_count)?;
        state.serialize_field(
            "dentistsPerClinic",
            &self.dentists_per_clinic().to_f64().unwrap_or_default(),
        )?;
        state.serialize_field("surgeonCount", &self.surgeon_count)?;
        state.serialize_field("priceDenture", &self.price_economy_denture)?;
        state.serialize_field("priceTier1Low", &self.price_tier1_low)?;
        state.serialize_field("priceTier1High", &self.price_tier1_high)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn ratio_rounds_to_two_places() {
        assert_eq!(dentists_per_clinic(136, 65), dec!(2.09));
        assert_eq!(dentists_per_clinic(45, 22), dec!(2.05));
        assert_eq!(dentists_per_clinic(5, 3), dec!(1.67));
        assert_eq!(dentists_per_clinic(5, 2), dec!(2.5));
    }

    #[test]
    fn ratio_is_zero_without_clinics() {
        assert_eq!(dentists_per_clinic(12, 0), Decimal::ZERO);
    }

    #[test]
    fn ratio_tracks_counts_after_mutation() {
        let mut record = CompetitorRecord::try_new("Nuvia", GeographicFocus::Local)
            .unwrap()
            .with_counts(2, 4, 4);
        assert_eq!(record.dentists_per_clinic(), dec!(2));

        record.clinic_count = 8;
        assert_eq!(record.dentists_per_clinic(), dec!(0.5));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            CompetitorRecord::try_new("", GeographicFocus::National),
            Err(DomainError::EmptyOrganizationName)
        );
    }

    #[test]
    fn name_is_trimmed() {
        let record = CompetitorRecord::try_new("  Sage Dental ", GeographicFocus::Regional).unwrap();
        assert_eq!(record.organization_name(), "Sage Dental");
    }

    #[test]
    fn focus_parses_case_insensitively() {
        assert_eq!(GeographicFocus::parse("NATIONAL"), GeographicFocus::National);
        assert_eq!(GeographicFocus::parse(" local "), GeographicFocus::Local);
        assert_eq!(GeographicFocus::parse(""), GeographicFocus::Unspecified);
        assert_eq!(
            GeographicFocus::parse("Statewide"),
            GeographicFocus::Other("Statewide".into())
        );
    }

    #[test]
    fn price_points_skip_unknown_and_zero() {
        let record = CompetitorRecord::try_new("Archpoint ID", GeographicFocus::Local)
            .unwrap()
            .with_prices(Price::Unknown, Price::whole(1500), Price::whole(0));

        assert_eq!(record.price_points(), vec![("Tier 1 (Low)", dec!(1500))]);
    }

    #[test]
    fn serializes_with_wire_names() {
        let record = CompetitorRecord::try_new("X", GeographicFocus::Local)
            .unwrap()
            .with_counts(2, 5, 1)
            .with_prices(Price::Unknown, Price::whole(500), Price::whole(900));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dsoName"], "X");
        assert_eq!(json["geographicFocus"], "Local");
        assert_eq!(json["dentistsPerClinic"], 2.5);
        assert_eq!(json["priceDenture"], "TBD");
        assert_eq!(json["priceTier1Low"], 500);
    }
}
