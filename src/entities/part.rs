//! Part entity - a single component of a vehicle and its physical condition

use serde::{Deserialize, Serialize};

use crate::core::error::DiagnosticError;

/// Kind of a vehicle component
///
/// The five named kinds carry a required quota (see [`PartType::quota`]).
/// Any other label found on a record is kept verbatim as [`PartType::Other`]
/// and is never reported missing.
///
/// Known labels are matched case-insensitively with `-` and spaces read as `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartType {
    Engine,
    Electrical,
    FuelFilter,
    OilFilter,
    Tire,
    Other(String),
}

impl PartType {
    /// Part types that carry a quota, in reporting order
    pub const QUOTA_BEARING: [PartType; 5] = [
        PartType::Engine,
        PartType::Electrical,
        PartType::FuelFilter,
        PartType::OilFilter,
        PartType::Tire,
    ];

    /// Minimum number of parts of this type a complete vehicle carries
    pub fn quota(&self) -> Option<u32> {
        match self {
            PartType::Engine => Some(1),
            PartType::Electrical => Some(1),
            PartType::FuelFilter => Some(1),
            PartType::OilFilter => Some(1),
            PartType::Tire => Some(4),
            PartType::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PartType::Engine => "ENGINE",
            PartType::Electrical => "ELECTRICAL",
            PartType::FuelFilter => "FUEL_FILTER",
            PartType::OilFilter => "OIL_FILTER",
            PartType::Tire => "TIRE",
            PartType::Other(label) => label,
        }
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PartType {
    fn from(s: String) -> Self {
        match normalize_label(&s).as_str() {
            "ENGINE" => PartType::Engine,
            "ELECTRICAL" => PartType::Electrical,
            "FUEL_FILTER" => PartType::FuelFilter,
            "OIL_FILTER" => PartType::OilFilter,
            "TIRE" => PartType::Tire,
            _ => PartType::Other(s),
        }
    }
}

impl From<PartType> for String {
    fn from(part_type: PartType) -> Self {
        part_type.as_str().to_string()
    }
}

impl std::str::FromStr for PartType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PartType::from(s.to_string()))
    }
}

/// Physical condition of a part
///
/// Only `NEW`, `GOOD` and `WORN` count as working. Every other value,
/// including labels this version does not know about, is non-working.
/// Unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionType {
    New,
    Good,
    Worn,
    WornOut,
    Damaged,
    Cracked,
    Flat,
    Clogged,
    NoPower,
    DoesNotWork,
    Other(String),
}

impl ConditionType {
    /// Conditions treated as non-damaged
    pub const WORKING: [ConditionType; 3] =
        [ConditionType::New, ConditionType::Good, ConditionType::Worn];

    pub fn is_working(&self) -> bool {
        match self {
            ConditionType::New | ConditionType::Good | ConditionType::Worn => true,
            ConditionType::WornOut
            | ConditionType::Damaged
            | ConditionType::Cracked
            | ConditionType::Flat
            | ConditionType::Clogged
            | ConditionType::NoPower
            | ConditionType::DoesNotWork
            | ConditionType::Other(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConditionType::New => "NEW",
            ConditionType::Good => "GOOD",
            ConditionType::Worn => "WORN",
            ConditionType::WornOut => "WORN_OUT",
            ConditionType::Damaged => "DAMAGED",
            ConditionType::Cracked => "CRACKED",
            ConditionType::Flat => "FLAT",
            ConditionType::Clogged => "CLOGGED",
            ConditionType::NoPower => "NO_POWER",
            ConditionType::DoesNotWork => "DOES_NOT_WORK",
            ConditionType::Other(label) => label,
        }
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ConditionType {
    fn from(s: String) -> Self {
        match normalize_label(&s).as_str() {
            "NEW" => ConditionType::New,
            "GOOD" => ConditionType::Good,
            "WORN" => ConditionType::Worn,
            "WORN_OUT" => ConditionType::WornOut,
            "DAMAGED" => ConditionType::Damaged,
            "CRACKED" => ConditionType::Cracked,
            "FLAT" => ConditionType::Flat,
            "CLOGGED" => ConditionType::Clogged,
            "NO_POWER" => ConditionType::NoPower,
            "DOES_NOT_WORK" => ConditionType::DoesNotWork,
            _ => ConditionType::Other(s),
        }
    }
}

impl From<ConditionType> for String {
    fn from(condition: ConditionType) -> Self {
        condition.as_str().to_string()
    }
}

impl std::str::FromStr for ConditionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConditionType::from(s.to_string()))
    }
}

/// Uppercase a label and fold `-` and spaces into `_`
fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Part as it appears in a serialized record, before presence checks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPart {
    #[serde(rename = "type", default)]
    pub part_type: Option<PartType>,

    #[serde(default)]
    pub condition: Option<ConditionType>,
}

/// A vehicle component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPart")]
pub struct Part {
    #[serde(rename = "type")]
    pub part_type: PartType,

    pub condition: ConditionType,
}

impl Part {
    pub fn new(part_type: PartType, condition: ConditionType) -> Self {
        Self {
            part_type,
            condition,
        }
    }

    pub fn is_in_working_condition(&self) -> bool {
        self.condition.is_working()
    }
}

impl TryFrom<RawPart> for Part {
    type Error = DiagnosticError;

    fn try_from(raw: RawPart) -> Result<Self, Self::Error> {
        let part_type = raw
            .part_type
            .ok_or_else(|| DiagnosticError::invalid_argument("PartType must not be null"))?;
        let condition = raw
            .condition
            .ok_or_else(|| DiagnosticError::invalid_argument("ConditionType must not be null"))?;
        Ok(Part::new(part_type, condition))
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.part_type, self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_table() {
        assert_eq!(PartType::Engine.quota(), Some(1));
        assert_eq!(PartType::Electrical.quota(), Some(1));
        assert_eq!(PartType::FuelFilter.quota(), Some(1));
        assert_eq!(PartType::OilFilter.quota(), Some(1));
        assert_eq!(PartType::Tire.quota(), Some(4));
        assert_eq!(PartType::Other("SPARK_PLUG".to_string()).quota(), None);
    }

    #[test]
    fn test_quota_bearing_types_all_have_quotas() {
        for part_type in &PartType::QUOTA_BEARING {
            assert!(part_type.quota().is_some(), "{} has no quota", part_type);
        }
    }

    #[test]
    fn test_part_type_parsing() {
        assert_eq!("ENGINE".parse::<PartType>().unwrap(), PartType::Engine);
        assert_eq!("fuel_filter".parse::<PartType>().unwrap(), PartType::FuelFilter);
        assert_eq!("oil-filter".parse::<PartType>().unwrap(), PartType::OilFilter);
        assert_eq!(
            "muffler".parse::<PartType>().unwrap(),
            PartType::Other("muffler".to_string())
        );
    }

    #[test]
    fn test_working_conditions() {
        assert!(ConditionType::New.is_working());
        assert!(ConditionType::Good.is_working());
        assert!(ConditionType::Worn.is_working());
        assert!(!ConditionType::WornOut.is_working());
        assert!(!ConditionType::Damaged.is_working());
        assert!(!ConditionType::Flat.is_working());
    }

    #[test]
    fn test_unknown_condition_is_not_working() {
        let condition: ConditionType = "RUSTED_THROUGH".parse().unwrap();
        assert_eq!(condition, ConditionType::Other("RUSTED_THROUGH".to_string()));
        assert!(!condition.is_working());
        assert!(!Part::new(PartType::Tire, condition).is_in_working_condition());
    }

    #[test]
    fn test_unknown_labels_kept_verbatim() {
        let part: Part = serde_yml::from_str("type: Roof Rack\ncondition: bent-ish\n").unwrap();
        assert_eq!(part.part_type, PartType::Other("Roof Rack".to_string()));
        assert_eq!(part.condition, ConditionType::Other("bent-ish".to_string()));
        assert_eq!(part.to_string(), "Roof Rack (bent-ish)");
    }

    #[test]
    fn test_condition_display_matches_label() {
        assert_eq!(ConditionType::DoesNotWork.to_string(), "DOES_NOT_WORK");
        assert_eq!("does not work".parse::<ConditionType>().unwrap(), ConditionType::DoesNotWork);
    }

    #[test]
    fn test_part_deserialize() {
        let part: Part = serde_yml::from_str("type: TIRE\ncondition: FLAT\n").unwrap();
        assert_eq!(part.part_type, PartType::Tire);
        assert_eq!(part.condition, ConditionType::Flat);
        assert!(!part.is_in_working_condition());
    }

    #[test]
    fn test_part_without_type_is_rejected() {
        let err = serde_yml::from_str::<Part>("condition: NEW\n").unwrap_err();
        assert!(err.to_string().contains("PartType must not be null"));
    }

    #[test]
    fn test_part_without_condition_is_rejected() {
        let err = Part::try_from(RawPart {
            part_type: Some(PartType::Engine),
            condition: None,
        })
        .unwrap_err();
        assert!(matches!(err, DiagnosticError::InvalidArgument(_)));
        assert!(err.to_string().contains("ConditionType must not be null"));
    }

    #[test]
    fn test_part_serializes_labels() {
        let part = Part::new(PartType::FuelFilter, ConditionType::Clogged);
        let yaml = serde_yml::to_string(&part).unwrap();
        assert!(yaml.contains("type: FUEL_FILTER"));
        assert!(yaml.contains("condition: CLOGGED"));
    }
}
