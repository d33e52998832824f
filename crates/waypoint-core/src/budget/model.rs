//! Budget planner domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, WaypointError};
use crate::item::LineDetail;

/// Spending level chosen for the trip. Scales every derived category.
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
pub enum BudgetStyle {
    Budget,
    #[default]
    Moderate,
    Luxury,
}

impl BudgetStyle {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Budget => 0.8,
            Self::Moderate => 1.0,
            Self::Luxury => 1.5,
        }
    }

    /// Capitalized name used in reports ("Moderate").
    pub fn title(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Moderate => "Moderate",
            Self::Luxury => "Luxury",
        }
    }
}

/// Report section a budget category is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum BudgetSection {
    #[strum(serialize = "Pre-Trip Costs")]
    PreTrip,
    #[strum(serialize = "Onboard Expenses")]
    Onboard,
    #[strum(serialize = "Shore Excursions")]
    ShoreExcursions,
    #[strum(serialize = "Miscellaneous")]
    Miscellaneous,
}

/// Parameters of a budget plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfig {
    pub total_budget: f64,
    pub travelers: u32,
    pub nights: u32,
    pub style: BudgetStyle,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            total_budget: 5000.0,
            travelers: 2,
            nights: 7,
            style: BudgetStyle::Moderate,
        }
    }
}

impl BudgetConfig {
    pub fn new(total_budget: f64, travelers: u32, nights: u32, style: BudgetStyle) -> Self {
        Self {
            total_budget,
            travelers,
            nights,
            style,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.total_budget.is_finite() || self.total_budget <= 0.0 {
            return Err(WaypointError::validation(
                "total budget must be a positive amount",
            ));
        }
        if self.travelers == 0 {
            return Err(WaypointError::validation("at least one traveler is required"));
        }
        if self.nights == 0 {
            return Err(WaypointError::validation("trip must last at least one night"));
        }
        Ok(())
    }
}

/// Editable numbers on a budget row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Planned,
    Actual,
}

/// Payload of a budget row. `checked` on the row means paid or booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDetail {
    pub planned: f64,
    pub actual: f64,
    /// Share of the total budget the row was derived from; 0 for custom rows.
    pub percentage: f64,
    pub description: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl ExpenseDetail {
    /// How far actual spending is above (positive) or below (negative) plan.
    pub fn variance(&self) -> f64 {
        self.actual - self.planned
    }

    pub fn is_over(&self) -> bool {
        self.actual > self.planned
    }
}

impl LineDetail for ExpenseDetail {
    type Field = ExpenseField;

    fn set_field(&mut self, field: ExpenseField, value: f64) -> bool {
        if !value.is_finite() || value < 0.0 {
            return false;
        }
        match field {
            ExpenseField::Planned => self.planned = value,
            ExpenseField::Actual => self.actual = value,
        }
        true
    }

    fn custom() -> Self {
        Self {
            planned: 0.0,
            actual: 0.0,
            percentage: 0.0,
            description: "Custom expense category".to_string(),
            tips: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_style_parsing() {
        assert_eq!(BudgetStyle::from_str("luxury").unwrap(), BudgetStyle::Luxury);
        assert_eq!(BudgetStyle::from_str("Budget").unwrap(), BudgetStyle::Budget);
        assert!(BudgetStyle::from_str("lavish").is_err());
        assert_eq!(BudgetStyle::Moderate.to_string(), "moderate");
    }

    #[test]
    fn test_config_validation() {
        assert!(BudgetConfig::default().validate().is_ok());
        let zero_nights = BudgetConfig {
            nights: 0,
            ..Default::default()
        };
        assert!(zero_nights.validate().unwrap_err().is_validation());
        let negative = BudgetConfig {
            total_budget: -10.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_expense_rejects_negative_amounts() {
        let mut detail = ExpenseDetail::custom();
        assert!(!detail.set_field(ExpenseField::Actual, -1.0));
        assert!(!detail.set_field(ExpenseField::Planned, f64::NAN));
        assert!(detail.set_field(ExpenseField::Actual, 120.0));
        assert!(detail.is_over());
        assert_eq!(detail.variance(), 120.0);
    }
}
