//! `cardiag quotas` command - Show the fixed part quotas and working conditions

use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::entities::part::{ConditionType, PartType};

pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

/// Quota table followed by the working-condition whitelist
fn render() -> String {
    let mut table = Builder::default();
    table.push_record(["Part Type", "Required"]);
    for part_type in PartType::QUOTA_BEARING {
        let quota = part_type.quota().unwrap_or_default();
        table.push_record([part_type.to_string(), quota.to_string()]);
    }

    let working: Vec<String> = ConditionType::WORKING
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut output = String::new();
    output.push_str(&table.build().with(Style::markdown()).to_string());
    output.push_str("\n\n");
    output.push_str(&format!("Working conditions: {}\n", working.join(", ")));
    output.push_str("Any other condition is reported as damaged.\n");
    output
}
