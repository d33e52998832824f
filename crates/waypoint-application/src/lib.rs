//! Application layer for Waypoint.
//!
//! Sessions here coordinate the domain tools with storage, the clock and
//! delivery. The CLI owns one session per invocation.

pub mod comparison_session;
pub mod context;
pub mod countdown_session;
pub mod planner_session;
pub mod price_session;

pub use comparison_session::{ComparisonSession, ComparisonState};
pub use context::PlannerContext;
pub use countdown_session::CountdownSession;
pub use planner_session::{PlannerSession, Stage};
pub use price_session::PriceSession;
