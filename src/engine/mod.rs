//! Diagnostic engine - the three-stage validation pipeline
//!
//! Stages run strictly in order and the first stage with findings decides
//! the [`Outcome`]:
//!
//! 1. **Fields** - `year`, `make` and `model` must be present and non-empty
//! 2. **Parts present** - every quota-bearing part type must meet its quota
//! 3. **Parts condition** - every part must be in working condition
//!
//! Within a stage all findings are collected before the stage concludes.

pub mod outcome;

pub use outcome::{DamagedPart, MissingPart, Outcome, Stage};

use crate::entities::part::Part;
use crate::entities::vehicle::{Vehicle, VehicleField};

/// Runs the diagnostic pipeline over vehicle records
///
/// The engine holds no state; one instance may diagnose any number of
/// records, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticEngine;

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self
    }

    /// Diagnose a vehicle record
    pub fn diagnose(&self, vehicle: &Vehicle) -> Outcome {
        let fields = missing_fields(vehicle);
        tracing::debug!(stage = %Stage::Fields, findings = fields.len(), "stage complete");
        if !fields.is_empty() {
            return Outcome::MissingFields { fields };
        }

        let missing = vehicle.missing_parts();
        tracing::debug!(stage = %Stage::PartsPresent, findings = missing.len(), "stage complete");
        if !missing.is_empty() {
            return Outcome::MissingParts { parts: missing };
        }

        let damaged = damaged_parts(&vehicle.parts);
        tracing::debug!(stage = %Stage::PartsCondition, findings = damaged.len(), "stage complete");
        if !damaged.is_empty() {
            return Outcome::DamagedParts { parts: damaged };
        }

        Outcome::Success {
            year: vehicle.year.clone().unwrap_or_default(),
            make: vehicle.make.clone().unwrap_or_default(),
            model: vehicle.model.clone().unwrap_or_default(),
        }
    }
}

/// Convenience wrapper around [`DiagnosticEngine::diagnose`]
pub fn diagnose(vehicle: &Vehicle) -> Outcome {
    DiagnosticEngine::new().diagnose(vehicle)
}

/// Absent or empty identifying fields; whitespace-only counts as present
fn missing_fields(vehicle: &Vehicle) -> Vec<VehicleField> {
    VehicleField::ALL
        .into_iter()
        .filter(|field| vehicle.field(*field).map_or(true, str::is_empty))
        .collect()
}

fn damaged_parts(parts: &[Part]) -> Vec<DamagedPart> {
    parts
        .iter()
        .filter(|part| !part.is_in_working_condition())
        .map(DamagedPart::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::part::{ConditionType, PartType};

    fn good(part_type: PartType) -> Part {
        Part::new(part_type, ConditionType::Good)
    }

    /// Complete, fully working vehicle with exactly the required parts
    fn valid_vehicle() -> Vehicle {
        let mut vehicle = Vehicle::new("1999", "Ford", "Mustang");
        vehicle.add_part(Part::new(PartType::Engine, ConditionType::New));
        vehicle.add_part(good(PartType::Electrical));
        vehicle.add_part(Part::new(PartType::FuelFilter, ConditionType::Worn));
        vehicle.add_part(good(PartType::OilFilter));
        for _ in 0..4 {
            vehicle.add_part(good(PartType::Tire));
        }
        vehicle
    }

    #[test]
    fn test_valid_vehicle_succeeds() {
        let outcome = diagnose(&valid_vehicle());
        assert_eq!(
            outcome,
            Outcome::Success {
                year: "1999".to_string(),
                make: "Ford".to_string(),
                model: "Mustang".to_string(),
            }
        );
        assert!(outcome.is_success());
        assert_eq!(outcome.stage(), None);
    }

    #[test]
    fn test_missing_make_only() {
        let mut vehicle = valid_vehicle();
        vehicle.make = None;
        assert_eq!(
            diagnose(&vehicle),
            Outcome::MissingFields {
                fields: vec![VehicleField::Make]
            }
        );

        // Independent of part contents
        vehicle.parts.clear();
        assert_eq!(
            diagnose(&vehicle),
            Outcome::MissingFields {
                fields: vec![VehicleField::Make]
            }
        );
    }

    #[test]
    fn test_empty_string_is_missing() {
        let mut vehicle = valid_vehicle();
        vehicle.year = Some(String::new());
        vehicle.model = Some(String::new());
        assert_eq!(
            diagnose(&vehicle),
            Outcome::MissingFields {
                fields: vec![VehicleField::Year, VehicleField::Model]
            }
        );
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        let mut vehicle = valid_vehicle();
        vehicle.model = Some("  ".to_string());
        assert!(diagnose(&vehicle).is_success());
    }

    #[test]
    fn test_all_fields_missing_reported_in_order() {
        let mut vehicle = valid_vehicle();
        vehicle.year = None;
        vehicle.make = None;
        vehicle.model = None;
        assert_eq!(
            diagnose(&vehicle),
            Outcome::MissingFields {
                fields: vec![VehicleField::Year, VehicleField::Make, VehicleField::Model]
            }
        );
    }

    #[test]
    fn test_fields_stage_wins_over_parts_stage() {
        let mut vehicle = valid_vehicle();
        vehicle.year = None;
        vehicle.parts.retain(|p| p.part_type != PartType::Engine);
        let outcome = diagnose(&vehicle);
        assert_eq!(outcome.stage(), Some(Stage::Fields));
    }

    #[test]
    fn test_three_tires_reports_one_missing() {
        let mut vehicle = valid_vehicle();
        let last_tire = vehicle
            .parts
            .iter()
            .rposition(|p| p.part_type == PartType::Tire)
            .unwrap();
        vehicle.parts.remove(last_tire);

        let outcome = diagnose(&vehicle);
        let expected = Outcome::missing_parts([(PartType::Tire, 1)]).unwrap();
        assert_eq!(outcome, expected);
    }

    #[test]
    fn test_all_shortfalls_reported_together() {
        let vehicle = Vehicle::new("2004", "Honda", "Civic").with_part(good(PartType::Tire));
        match diagnose(&vehicle) {
            Outcome::MissingParts { parts } => {
                assert_eq!(parts.len(), 5);
                assert_eq!(parts[&PartType::Tire], 3);
                assert_eq!(parts[&PartType::Engine], 1);
            }
            other => panic!("expected missing parts, got {:?}", other),
        }
    }

    #[test]
    fn test_parts_stage_wins_over_condition_stage() {
        let vehicle = Vehicle::new("2004", "Honda", "Civic")
            .with_part(Part::new(PartType::Engine, ConditionType::Damaged));
        assert_eq!(diagnose(&vehicle).stage(), Some(Stage::PartsPresent));
    }

    #[test]
    fn test_damaged_engine() {
        let mut vehicle = valid_vehicle();
        vehicle.parts[0] = Part::new(PartType::Engine, ConditionType::WornOut);
        assert_eq!(
            diagnose(&vehicle),
            Outcome::DamagedParts {
                parts: vec![DamagedPart::new(PartType::Engine, ConditionType::WornOut)]
            }
        );
    }

    #[test]
    fn test_all_damaged_parts_collected_in_order() {
        let mut vehicle = valid_vehicle();
        vehicle.add_part(Part::new(PartType::Tire, ConditionType::Flat));
        vehicle.parts[1] = Part::new(PartType::Electrical, ConditionType::NoPower);
        vehicle.add_part(Part::new(
            PartType::Other("MUFFLER".to_string()),
            ConditionType::Other("RUSTED".to_string()),
        ));

        assert_eq!(
            diagnose(&vehicle),
            Outcome::DamagedParts {
                parts: vec![
                    DamagedPart::new(PartType::Electrical, ConditionType::NoPower),
                    DamagedPart::new(PartType::Tire, ConditionType::Flat),
                    DamagedPart::new(
                        PartType::Other("MUFFLER".to_string()),
                        ConditionType::Other("RUSTED".to_string())
                    ),
                ]
            }
        );
    }

    #[test]
    fn test_surplus_parts_still_succeed() {
        let vehicle = valid_vehicle()
            .with_part(good(PartType::Tire))
            .with_part(good(PartType::Other("SPARE_KEY".to_string())));
        assert!(diagnose(&vehicle).is_success());
    }

    #[test]
    fn test_diagnose_is_idempotent() {
        let engine = DiagnosticEngine::new();
        for vehicle in [valid_vehicle(), Vehicle::default(), Vehicle::new("1", "2", "3")] {
            assert_eq!(engine.diagnose(&vehicle), engine.diagnose(&vehicle));
        }
    }

    #[test]
    fn test_engine_across_threads() {
        let vehicles = vec![valid_vehicle(), Vehicle::default()];
        let outcomes: Vec<Outcome> = std::thread::scope(|scope| {
            let handles: Vec<_> = vehicles
                .iter()
                .map(|vehicle| scope.spawn(move || diagnose(vehicle)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(outcomes[0].is_success());
        assert_eq!(outcomes[1].stage(), Some(Stage::Fields));
    }
}
