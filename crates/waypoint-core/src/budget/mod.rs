//! Budget planner domain module.
//!
//! Splits a total trip budget into spending categories, then tracks actual
//! spending against the plan.
//!
//! # Module Structure
//!
//! - `model`: `BudgetConfig`, `BudgetStyle`, `BudgetSection`, `ExpenseDetail`
//! - `table`: the static category breakdown
//! - `plan`: `BudgetPlan`, derivation and `BudgetSummary`
//! - `tool`: `BudgetPlanner`, report, email and print rendering

mod model;
mod plan;
mod tool;
pub mod table;

pub use model::{BudgetConfig, BudgetSection, BudgetStyle, ExpenseDetail, ExpenseField};
pub use plan::{BudgetPlan, BudgetSummary, CategoryVariance, derive_budget};
pub use tool::BudgetPlanner;
