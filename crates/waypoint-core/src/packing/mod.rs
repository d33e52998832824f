//! Packing checklist domain module.
//!
//! # Module Structure
//!
//! - `model`: destination, season, activity and category enums, `PackingConfig`
//! - `table`: static item tables keyed by those enums
//! - `plan`: `PackingPlan` and its derivation
//! - `tool`: `PackingPlanner`, report, email and print rendering

mod model;
mod plan;
mod tool;
pub mod table;

pub use model::{
    Activity, Destination, PackingCategory, PackingConfig, PackingDetail, PackingField, Season,
};
pub use plan::{PackingPlan, derive_packing};
pub use tool::PackingPlanner;
