//! Cruise price calculator domain module.
//!
//! Estimates a fare from cabin, length, party size, line and add-on packages.
//! Only the inputs are stored; the quote is recomputed on every read.

mod model;
mod quote;

pub use model::{
    AddOn, AddOnCharge, CRUISE_LENGTHS, CabinRate, CabinType, CruiseLine, PARTY_SIZES,
    PricePreferences,
};
pub use quote::{PriceQuote, RESIDENT_DISCOUNT, TAX_RATE};
