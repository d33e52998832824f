//! Domain model for the Waypoint cruise planning toolkit.
//!
//! Three checklist-style planners (budget, packing, itinerary) share one row
//! model, [`item::ItemList`], and one life cycle described by
//! [`tool::PlannerTool`]. Destination comparison is a separate flow that asks
//! a [`comparison::DestinationMetricsProvider`] for its numbers. The price
//! calculator ([`pricing`]) and the departure countdown ([`countdown`]) only
//! keep their inputs and recompute everything else.
//!
//! Nothing in this crate touches the network or the file system except
//! [`export::ReportFile::write_to`]; storage and delivery sit behind the
//! traits in [`persistence`] and [`export`].

pub mod budget;
pub mod comparison;
pub mod config;
pub mod countdown;
pub mod error;
pub mod export;
pub mod item;
pub mod itinerary;
pub mod packing;
pub mod persistence;
pub mod pricing;
pub mod tool;

pub use error::{Result, WaypointError};
pub use tool::PlannerTool;
