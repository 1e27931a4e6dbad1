//! cardiag: vehicle record diagnostics
//!
//! Validates a vehicle record in three ordered stages (identifying fields,
//! required part quotas, part condition) and reports the first stage that
//! has findings.
//!
//! ```
//! use cardiag::engine::{diagnose, Outcome};
//! use cardiag::entities::{ConditionType, Part, PartType, Vehicle};
//!
//! let vehicle = Vehicle::new("1999", "Ford", "Mustang")
//!     .with_part(Part::new(PartType::Engine, ConditionType::New));
//!
//! match diagnose(&vehicle) {
//!     Outcome::MissingParts { parts } => assert_eq!(parts[&PartType::Tire], 4),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod entities;
pub mod yaml;
