//! Cruise countdown domain module.
//!
//! Tracks a departure date, breaks the remaining time into days, hours and
//! minutes, and walks a fixed list of planning milestones.

mod milestones;
mod model;

pub use milestones::{MILESTONES, Milestone};
pub use model::{COUNTDOWN_EXPORT, CruiseCountdown, MilestoneStatus, TimeLeft, UPCOMING_SHOWN};
