//! mst-core: shared foundation for the MST stepper.
//!
//! Contains:
//! - ids (compact node identifiers)
//! - numeric (edge weights + tolerances)
//! - error (weight validation errors)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{WeightError, WeightResult};
pub use ids::*;
pub use numeric::*;
