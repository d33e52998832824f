//! Packing checklist domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, WaypointError};
use crate::item::LineDetail;

/// Cruise region the checklist is built for.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    #[default]
    Caribbean,
    Alaska,
    Mediterranean,
    Bahamas,
    Norway,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    #[default]
    Summer,
    Fall,
    Winter,
}

/// Optional activities that each pull in their own gear.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    FormalNights,
    WaterSports,
    ShoreExcursions,
    SpaWellness,
    Photography,
}

/// Grouping label of a packing row.
///
/// Stored on each row as its kebab-case key (`documents`, `seasonal`, ...),
/// so hand-added rows may also carry labels outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PackingCategory {
    Documents,
    Clothing,
    Toiletries,
    Electronics,
    Accessories,
    Destination,
    Activities,
    Seasonal,
    Personal,
}

impl PackingCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Documents => "Travel Documents",
            Self::Clothing => "Clothing & Apparel",
            Self::Toiletries => "Toiletries & Personal Care",
            Self::Electronics => "Electronics & Gadgets",
            Self::Accessories => "Travel Accessories",
            Self::Destination => "Destination Specific",
            Self::Activities => "Activity Gear",
            Self::Seasonal => "Seasonal Items",
            Self::Personal => "Personal Items",
        }
    }

    /// Display label for a stored category key; unknown keys are shown as is.
    pub fn label_for(key: &str) -> &str {
        key.parse::<PackingCategory>()
            .map(|category| category.label())
            .unwrap_or(key)
    }
}

/// Parameters of a packing checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingConfig {
    pub destination: Destination,
    pub nights: u32,
    pub season: Season,
    /// Selected activities in the order the user picked them.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            destination: Destination::Caribbean,
            nights: 7,
            season: Season::Summer,
            activities: Vec::new(),
        }
    }
}

impl PackingConfig {
    pub fn new(destination: Destination, nights: u32, season: Season) -> Self {
        Self {
            destination,
            nights,
            season,
            activities: Vec::new(),
        }
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.toggle_activity(activity);
        self
    }

    /// Selects `activity`, or deselects it when already selected.
    pub fn toggle_activity(&mut self, activity: Activity) {
        match self.activities.iter().position(|a| *a == activity) {
            Some(index) => {
                self.activities.remove(index);
            }
            None => self.activities.push(activity),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.nights == 0 {
            return Err(WaypointError::validation("trip must last at least one night"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingField {
    Quantity,
}

/// Payload of a packing row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl PackingDetail {
    pub fn with_quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
        }
    }
}

impl LineDetail for PackingDetail {
    type Field = PackingField;

    /// A quantity of zero clears it.
    fn set_field(&mut self, field: PackingField, value: f64) -> bool {
        if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
            return false;
        }
        match field {
            PackingField::Quantity => {
                let quantity = value.round() as u32;
                self.quantity = (quantity > 0).then_some(quantity);
            }
        }
        true
    }

    fn custom() -> Self {
        Self::default()
    }
}
