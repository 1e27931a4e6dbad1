//! Entity type definitions
//!
//! - [`Vehicle`] - identifying fields and installed parts
//! - [`Part`] - a component with its [`PartType`] and [`ConditionType`]

pub mod part;
pub mod vehicle;

pub use part::{ConditionType, Part, PartType, RawPart};
pub use vehicle::{Vehicle, VehicleField};
