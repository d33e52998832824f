//! Price calculator inputs and rate tables.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, WaypointError};

/// Cruise lengths the calculator prices, in days.
pub const CRUISE_LENGTHS: RangeInclusive<u32> = 3..=14;
/// Party sizes the calculator prices.
pub const PARTY_SIZES: RangeInclusive<u32> = 1..=4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CabinRate {
    pub base: f64,
    pub per_day: f64,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum CabinType {
    Interior,
    Oceanview,
    #[default]
    Balcony,
    Suite,
}

impl CabinType {
    /// Per-person rate at a multiplier of 1.0.
    pub fn rate(&self) -> CabinRate {
        let (base, per_day) = match self {
            Self::Interior => (599.0, 85.0),
            Self::Oceanview => (799.0, 115.0),
            Self::Balcony => (999.0, 145.0),
            Self::Suite => (1599.0, 225.0),
        };
        CabinRate { base, per_day }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Interior => "Interior Cabin",
            Self::Oceanview => "Ocean View",
            Self::Balcony => "Balcony",
            Self::Suite => "Suite",
        }
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum CruiseLine {
    #[default]
    Royal,
    Carnival,
    Norwegian,
    Celebrity,
    Princess,
    Msc,
}

impl CruiseLine {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Royal => 1.0,
            Self::Carnival => 0.9,
            Self::Norwegian => 1.05,
            Self::Celebrity => 1.15,
            Self::Princess => 1.1,
            Self::Msc => 0.85,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Royal => "Royal Caribbean",
            Self::Carnival => "Carnival",
            Self::Norwegian => "Norwegian",
            Self::Celebrity => "Celebrity",
            Self::Princess => "Princess",
            Self::Msc => "MSC",
        }
    }
}

/// How an add-on package is charged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOnCharge {
    /// Per traveler per day.
    PerDay(f64),
    /// Once per booking.
    Flat(f64),
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum AddOn {
    Drinks,
    Wifi,
    Gratuities,
    Specialty,
    Spa,
    Photos,
}

impl AddOn {
    pub fn charge(&self) -> AddOnCharge {
        match self {
            Self::Drinks => AddOnCharge::PerDay(59.0),
            Self::Wifi => AddOnCharge::PerDay(19.0),
            Self::Gratuities => AddOnCharge::PerDay(15.0),
            Self::Specialty => AddOnCharge::PerDay(35.0),
            Self::Spa => AddOnCharge::Flat(199.0),
            Self::Photos => AddOnCharge::Flat(149.0),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Drinks => "Unlimited Drinks Package",
            Self::Wifi => "Premium WiFi",
            Self::Gratuities => "Prepaid Gratuities",
            Self::Specialty => "Specialty Dining Package",
            Self::Spa => "Spa Package",
            Self::Photos => "Photo Package",
        }
    }

    /// Cost for a party of `travelers` on a `days`-day cruise.
    pub fn cost(&self, days: u32, travelers: u32) -> f64 {
        match self.charge() {
            AddOnCharge::PerDay(rate) => rate * days as f64 * travelers as f64,
            AddOnCharge::Flat(amount) => amount,
        }
    }
}

/// Everything the price calculator remembers between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricePreferences {
    pub cruise_length: u32,
    pub cabin_type: CabinType,
    pub travelers: u32,
    /// Selected packages in the order they were picked.
    #[serde(rename = "selectedAddons")]
    pub add_ons: Vec<AddOn>,
    pub cruise_line: CruiseLine,
    /// Essex County resident discount.
    pub resident_discount: bool,
}

impl Default for PricePreferences {
    fn default() -> Self {
        Self {
            cruise_length: 7,
            cabin_type: CabinType::Balcony,
            travelers: 2,
            add_ons: Vec::new(),
            cruise_line: CruiseLine::Royal,
            resident_discount: true,
        }
    }
}

impl PricePreferences {
    pub fn validate(&self) -> Result<()> {
        if !CRUISE_LENGTHS.contains(&self.cruise_length) {
            return Err(WaypointError::validation(format!(
                "cruise length must be {} to {} days",
                CRUISE_LENGTHS.start(),
                CRUISE_LENGTHS.end()
            )));
        }
        if !PARTY_SIZES.contains(&self.travelers) {
            return Err(WaypointError::validation(format!(
                "travelers must be {} to {}",
                PARTY_SIZES.start(),
                PARTY_SIZES.end()
            )));
        }
        Ok(())
    }

    /// Adds or removes a package. Returns whether it is now selected.
    pub fn toggle_add_on(&mut self, add_on: AddOn) -> bool {
        if let Some(pos) = self.add_ons.iter().position(|a| *a == add_on) {
            self.add_ons.remove(pos);
            false
        } else {
            self.add_ons.push(add_on);
            true
        }
    }

    pub fn has_add_on(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }
}
