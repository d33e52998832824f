//! Budget derivation and running totals.

use serde::{Deserialize, Serialize};

use super::model::{BudgetConfig, ExpenseDetail, ExpenseField};
use super::table::CATEGORY_TEMPLATES;
use crate::error::Result;
use crate::item::{ItemList, LineDetail};

/// A generated budget: the inputs plus one row per spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub config: BudgetConfig,
    pub items: ItemList<ExpenseDetail>,
}

/// Expands a configuration into the default category breakdown.
///
/// Each row's planned amount is `round(total × percentage / 100 × multiplier)`
/// and its actual amount starts at zero.
pub fn derive_budget(config: &BudgetConfig) -> Result<BudgetPlan> {
    config.validate()?;
    let multiplier = config.style.multiplier();

    let mut items = ItemList::new();
    for template in CATEGORY_TEMPLATES {
        let planned = (config.total_budget * template.percentage / 100.0 * multiplier).round();
        items.push_template_unique(
            template.name,
            template.section.to_string(),
            ExpenseDetail {
                planned,
                actual: 0.0,
                percentage: template.percentage,
                description: template.description.to_string(),
                tips: template.tips.iter().map(|tip| tip.to_string()).collect(),
            },
        );
    }

    tracing::info!(
        "Derived budget of {} rows for {} ({} style)",
        items.len(),
        config.total_budget,
        config.style
    );
    Ok(BudgetPlan {
        config: config.clone(),
        items,
    })
}

impl BudgetPlan {
    /// Adds a hand-entered expense row with a planned amount.
    ///
    /// A blank name or an invalid amount leaves the plan untouched.
    pub fn add_custom_expense(&mut self, name: &str, section: &str, planned: f64) -> Option<String> {
        let mut detail = ExpenseDetail::custom();
        if !detail.set_field(ExpenseField::Planned, planned) {
            return None;
        }
        let id = self.items.add_custom_item(name, section)?;
        self.items.update_field(&id, ExpenseField::Planned, planned);
        Some(id)
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::compute(self)
    }
}

/// Over/under figure for one budget row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryVariance {
    pub id: String,
    pub name: String,
    pub section: String,
    pub planned: f64,
    pub actual: f64,
    pub over: bool,
    /// Absolute distance between actual and planned.
    pub difference: f64,
    pub paid: bool,
}

/// Totals shown under a budget breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_planned: f64,
    pub total_actual: f64,
    /// `round(total / nights)`.
    pub daily_budget: f64,
    /// `round(total × 0.10)`.
    pub emergency_fund: f64,
    /// `total − actual`; negative once spending exceeds the budget.
    pub remaining: f64,
    /// Actual spending as a share of the total, 0 to 100+.
    pub percent_used: f64,
    pub per_person: f64,
    /// `round(total / travelers / nights)`, the headline figure.
    pub per_person_daily: f64,
    pub paid_count: usize,
    pub categories: Vec<CategoryVariance>,
}

impl BudgetSummary {
    pub fn compute(plan: &BudgetPlan) -> Self {
        let config = &plan.config;
        let total = config.total_budget;

        let total_planned = plan.items.iter().map(|i| i.detail.planned).sum();
        let total_actual: f64 = plan.items.iter().map(|i| i.detail.actual).sum();

        let daily_budget = if config.nights == 0 {
            total.round()
        } else {
            (total / config.nights as f64).round()
        };
        let per_person = if config.travelers == 0 {
            total
        } else {
            total / config.travelers as f64
        };
        let per_person_daily = if config.nights == 0 {
            per_person.round()
        } else {
            (per_person / config.nights as f64).round()
        };
        let percent_used = if total > 0.0 {
            total_actual / total * 100.0
        } else {
            0.0
        };

        let categories = plan
            .items
            .iter()
            .map(|item| CategoryVariance {
                id: item.id.clone(),
                name: item.name.clone(),
                section: item.category.clone(),
                planned: item.detail.planned,
                actual: item.detail.actual,
                over: item.detail.is_over(),
                difference: item.detail.variance().abs(),
                paid: item.checked,
            })
            .collect();

        Self {
            total_budget: total,
            total_planned,
            total_actual,
            daily_budget,
            emergency_fund: (total * 0.1).round(),
            remaining: total - total_actual,
            percent_used,
            per_person,
            per_person_daily,
            paid_count: plan.items.checked_count(),
            categories,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_actual > self.total_budget
    }
}
