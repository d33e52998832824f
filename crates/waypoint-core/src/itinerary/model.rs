//! Itinerary builder domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::LineDetail;

/// Which sample itinerary to start from, plus optional overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryConfig {
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cruise_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_port: Option<String>,
}

impl ItineraryConfig {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            departure_date: None,
            cruise_line: None,
            ship_name: None,
            departure_port: None,
        }
    }

    pub fn with_departure_date(mut self, date: NaiveDate) -> Self {
        self.departure_date = Some(date);
        self
    }
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self::new("caribbean-7")
    }
}

/// A port of call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: String,
    pub name: String,
    pub country: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub day_number: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub top_attractions: Vec<String>,
}

/// Partial edit of a port; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortUpdate {
    pub name: Option<String>,
    pub country: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub day_number: Option<u32>,
    pub description: Option<String>,
}

impl PortUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcursionField {
    Price,
}

/// Payload of an excursion row. `checked` on the row means selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcursionDetail {
    /// Port this excursion departs from.
    pub port_id: String,
    #[serde(default)]
    pub duration: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl LineDetail for ExcursionDetail {
    type Field = ExcursionField;

    fn set_field(&mut self, field: ExcursionField, value: f64) -> bool {
        if !value.is_finite() || value < 0.0 {
            return false;
        }
        match field {
            ExcursionField::Price => self.price = value,
        }
        true
    }

    fn custom() -> Self {
        Self {
            port_id: String::new(),
            duration: String::new(),
            price: 0.0,
            description: String::new(),
        }
    }
}
