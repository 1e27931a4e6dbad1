//! Diagnostic outcomes and the findings they carry

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::error::DiagnosticError;
use crate::entities::part::{ConditionType, Part, PartType};
use crate::entities::vehicle::VehicleField;

/// Terminal result of a diagnose run
///
/// Exactly one stage decides the outcome: the first stage with findings,
/// or `Success` when no stage has any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Identifying fields that are absent or empty, in Year/Make/Model order
    MissingFields { fields: Vec<VehicleField> },

    /// Quota-bearing part types below quota, with the shortfall for each
    MissingParts { parts: BTreeMap<PartType, u32> },

    /// Parts not in working condition, in record order
    DamagedParts { parts: Vec<DamagedPart> },

    /// Every check passed
    Success {
        year: String,
        make: String,
        model: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Which stage produced this outcome
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Outcome::MissingFields { .. } => Some(Stage::Fields),
            Outcome::MissingParts { .. } => Some(Stage::PartsPresent),
            Outcome::DamagedParts { .. } => Some(Stage::PartsCondition),
            Outcome::Success { .. } => None,
        }
    }

    /// Number of individual findings (zero for success)
    pub fn finding_count(&self) -> usize {
        match self {
            Outcome::MissingFields { fields } => fields.len(),
            Outcome::MissingParts { parts } => parts.len(),
            Outcome::DamagedParts { parts } => parts.len(),
            Outcome::Success { .. } => 0,
        }
    }

    /// Build a missing-parts outcome from externally supplied shortfalls
    ///
    /// Every entry is checked through [`MissingPart::new`], so a zero count
    /// is rejected rather than reported.
    pub fn missing_parts(
        shortfalls: impl IntoIterator<Item = (PartType, u32)>,
    ) -> Result<Self, DiagnosticError> {
        let parts = shortfalls
            .into_iter()
            .map(|(part_type, count)| {
                MissingPart::new(part_type, count).map(|m| (m.part_type, m.count))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Outcome::MissingParts { parts })
    }

    /// Missing-part findings as a list, in quota-table order
    pub fn missing_part_list(&self) -> Vec<MissingPart> {
        match self {
            Outcome::MissingParts { parts } => parts
                .iter()
                .map(|(part_type, count)| MissingPart {
                    part_type: part_type.clone(),
                    count: *count,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fields,
    PartsPresent,
    PartsCondition,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Fields => write!(f, "fields"),
            Stage::PartsPresent => write!(f, "parts-present"),
            Stage::PartsCondition => write!(f, "parts-condition"),
        }
    }
}

/// Shortfall of one part type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingPart {
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub count: u32,
}

impl MissingPart {
    /// A shortfall must be positive
    pub fn new(part_type: PartType, count: u32) -> Result<Self, DiagnosticError> {
        if count == 0 {
            return Err(DiagnosticError::invalid_argument(
                "Count must be greater than 0",
            ));
        }
        Ok(Self { part_type, count })
    }
}

impl std::fmt::Display for MissingPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing Part(s) Detected: {} - Count: {}", self.part_type, self.count)
    }
}

/// A part found in non-working condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DamagedPart {
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub condition: ConditionType,
}

impl DamagedPart {
    pub fn new(part_type: PartType, condition: ConditionType) -> Self {
        Self {
            part_type,
            condition,
        }
    }
}

impl From<&Part> for DamagedPart {
    fn from(part: &Part) -> Self {
        DamagedPart::new(part.part_type.clone(), part.condition.clone())
    }
}

impl std::fmt::Display for DamagedPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Damaged Part Detected: {} - Condition: {}", self.part_type, self.condition)
    }
}
