//! Vehicle entity - identifying fields plus the list of installed parts

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::entities::part::{Part, PartType};

/// Identifying field of a vehicle record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleField {
    Year,
    Make,
    Model,
}

impl VehicleField {
    /// All identifying fields, in validation order
    pub const ALL: [VehicleField; 3] = [VehicleField::Year, VehicleField::Make, VehicleField::Model];
}

impl std::fmt::Display for VehicleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleField::Year => write!(f, "Year"),
            VehicleField::Make => write!(f, "Make"),
            VehicleField::Model => write!(f, "Model"),
        }
    }
}

/// A vehicle record as handed to the diagnostic engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Model year (kept as text, e.g. "1999")
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Manufacturer
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    /// Model name
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Installed parts, in record order
    #[serde(default, deserialize_with = "optional_parts")]
    pub parts: Vec<Part>,
}

impl Vehicle {
    /// Create a vehicle with all identifying fields set and no parts
    pub fn new(year: impl Into<String>, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            make: Some(make.into()),
            model: Some(model.into()),
            parts: Vec::new(),
        }
    }

    /// Builder-style part addition
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Add a part to the record
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Get an identifying field's raw value
    pub fn field(&self, field: VehicleField) -> Option<&str> {
        match field {
            VehicleField::Year => self.year.as_deref(),
            VehicleField::Make => self.make.as_deref(),
            VehicleField::Model => self.model.as_deref(),
        }
    }

    /// Part types below quota, mapped to how many are missing
    ///
    /// Only quota-bearing types appear; types at or above quota are omitted.
    /// The result depends on part counts alone, not on their order.
    pub fn missing_parts(&self) -> BTreeMap<PartType, u32> {
        let mut tally: BTreeMap<PartType, u32> = PartType::QUOTA_BEARING
            .into_iter()
            .map(|part_type| (part_type, 0))
            .collect();

        for part in &self.parts {
            if let Some(count) = tally.get_mut(&part.part_type) {
                *count += 1;
            }
        }

        tally
            .into_iter()
            .filter_map(|(part_type, count)| {
                let quota = part_type.quota()?;
                let shortfall = quota.saturating_sub(count);
                (shortfall > 0).then_some((part_type, shortfall))
            })
            .collect()
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |value: &Option<String>| match value.as_deref() {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => "?".to_string(),
        };
        write!(
            f,
            "{} {} {} ({} part{})",
            show(&self.year),
            show(&self.make),
            show(&self.model),
            self.parts.len(),
            if self.parts.len() == 1 { "" } else { "s" }
        )
    }
}

/// Scalar accepted where a string is expected (`year: 1999`)
#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        match text {
            Text::Str(s) => s,
            Text::Int(n) => n.to_string(),
            Text::Float(n) => n.to_string(),
            Text::Bool(b) => b.to_string(),
        }
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Text>::deserialize(deserializer)?.map(String::from))
}

/// `parts:` with no entries deserializes as null in YAML
fn optional_parts<'de, D>(deserializer: D) -> Result<Vec<Part>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Part>>::deserialize(deserializer)?.unwrap_or_default())
}
