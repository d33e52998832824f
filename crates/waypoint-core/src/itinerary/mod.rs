//! Itinerary builder domain module.
//!
//! # Module Structure
//!
//! - `model`: `ItineraryConfig`, `Port`, `ExcursionDetail`
//! - `catalog`: sample itineraries
//! - `plan`: `ItineraryPlan`, port editing, excursion totals and share tokens
//! - `tool`: `ItineraryPlanner`, report, email and print rendering

pub mod catalog;
mod model;
mod plan;
mod tool;

pub use model::{ExcursionDetail, ExcursionField, ItineraryConfig, Port, PortUpdate};
pub use plan::{ItineraryPlan, derive_itinerary};
pub use tool::ItineraryPlanner;
