//! Water usage calculations.
//!
//! Leaf to root: unit conversion, the annual demand model, the cost model and
//! the irrigation method optimizer. Everything here is a pure function of its
//! arguments.

pub mod common;
pub mod cost;
pub mod demand;
pub mod optimizer;
pub mod units;

pub use cost::{compute_cost, evaluate_usage};
pub use demand::compute_annual_water_gallons;
pub use optimizer::{compare_methods, recommend, recommend_for};
pub use units::{ConversionError, Unit, convert};
