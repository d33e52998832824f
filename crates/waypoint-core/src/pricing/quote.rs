//! Fare estimate derived from [`PricePreferences`].

use serde::Serialize;

use super::model::PricePreferences;
use crate::error::Result;

/// Taxes and port fees as a share of the base fare.
pub const TAX_RATE: f64 = 0.175;
/// Essex County resident discount on the whole booking.
pub const RESIDENT_DISCOUNT: f64 = 0.05;

/// Unrounded estimate; round only when displaying.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub base_fare: f64,
    pub taxes: f64,
    pub add_ons: f64,
    pub total: f64,
    pub per_person: f64,
    /// Total after the resident discount, or the total when it does not apply.
    pub with_discount: f64,
    pub travelers: u32,
    pub discounted: bool,
}

impl PriceQuote {
    pub fn compute(prefs: &PricePreferences) -> Result<Self> {
        prefs.validate()?;

        let rate = prefs.cabin_type.rate();
        let days = prefs.cruise_length as f64;
        let travelers = prefs.travelers as f64;

        let per_traveler = rate.base + rate.per_day * days;
        let base_fare = per_traveler * travelers * prefs.cruise_line.multiplier();
        let taxes = base_fare * TAX_RATE;
        let add_ons = prefs
            .add_ons
            .iter()
            .map(|add_on| add_on.cost(prefs.cruise_length, prefs.travelers))
            .sum::<f64>();
        let total = base_fare + taxes + add_ons;
        let with_discount = if prefs.resident_discount {
            total * (1.0 - RESIDENT_DISCOUNT)
        } else {
            total
        };

        Ok(Self {
            base_fare,
            taxes,
            add_ons,
            total,
            per_person: total / travelers,
            with_discount,
            travelers: prefs.travelers,
            discounted: prefs.resident_discount,
        })
    }

    /// What each traveler pays after any discount.
    pub fn payable_per_person(&self) -> f64 {
        self.with_discount / self.travelers as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{AddOn, CabinType, CruiseLine};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_default_balcony_week() {
        let quote = PriceQuote::compute(&PricePreferences::default()).unwrap();
        assert!(close(quote.base_fare, 4028.0));
        assert!(close(quote.taxes, 704.9));
        assert_eq!(quote.add_ons, 0.0);
        assert!(close(quote.total, 4732.9));
        assert!(close(quote.per_person, 2366.45));
        assert!(close(quote.with_discount, 4496.255));
        assert!(close(quote.payable_per_person(), 2248.1275));
    }

    #[test]
    fn test_line_multiplier_and_add_ons() {
        let prefs = PricePreferences {
            cruise_line: CruiseLine::Carnival,
            add_ons: vec![AddOn::Drinks, AddOn::Spa],
            resident_discount: false,
            ..PricePreferences::default()
        };
        let quote = PriceQuote::compute(&prefs).unwrap();
        assert!(close(quote.base_fare, 3625.2));
        // Drinks: 59 x 7 days x 2 travelers; spa is flat.
        assert!(close(quote.add_ons, 826.0 + 199.0));
        assert!(close(quote.total, 3625.2 * 1.175 + 1025.0));
        assert_eq!(quote.with_discount, quote.total);
        assert!(close(quote.payable_per_person(), quote.per_person));
    }

    #[test]
    fn test_flat_add_on_ignores_party_size() {
        let solo = PricePreferences {
            cabin_type: CabinType::Interior,
            travelers: 1,
            add_ons: vec![AddOn::Photos],
            ..PricePreferences::default()
        };
        let family = PricePreferences {
            travelers: 4,
            ..solo.clone()
        };
        let solo = PriceQuote::compute(&solo).unwrap();
        let family = PriceQuote::compute(&family).unwrap();
        assert_eq!(solo.add_ons, 149.0);
        assert_eq!(family.add_ons, 149.0);
        assert!(close(family.base_fare, solo.base_fare * 4.0));
    }

    #[test]
    fn test_out_of_range_inputs_are_rejected() {
        let prefs = PricePreferences {
            cruise_length: 30,
            ..PricePreferences::default()
        };
        assert!(PriceQuote::compute(&prefs).unwrap_err().is_validation());
    }
}
