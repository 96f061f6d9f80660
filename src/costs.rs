use crate::ui::constants::UiText;
use crate::ui::utils::format_funding;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Per craft type: what renting the active airframes of that type costs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftAccount {
    pub name: String,
    pub rent_cost: i64,
    #[serde(default)]
    pub requirements_met: bool,
    #[serde(default)]
    pub count: u32,
    /// Some mods want the row visible even with zero craft rented.
    #[serde(default)]
    pub force_show: bool,
}

/// Per staff type: counts and salaries as the economic model reports them.
/// `total_salary` is authoritative; with rank-dependent pay it is not simply
/// `count * base_salary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffAccount {
    pub name: String,
    pub base_salary: i64,
    #[serde(default)]
    pub dynamic_salary: bool,
    #[serde(default)]
    pub requirements_met: bool,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_salary: i64,
}

/// Externally supplied monthly figures for one base. The economic model that
/// produces them is out of scope here; this is its report format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseLedger {
    #[serde(default)]
    pub crafts: Vec<CraftAccount>,
    #[serde(default)]
    pub staff: Vec<StaffAccount>,
    #[serde(default)]
    pub engineers: u32,
    #[serde(default)]
    pub engineer_cost: i64,
    #[serde(default)]
    pub scientists: u32,
    #[serde(default)]
    pub scientist_cost: i64,
    #[serde(default)]
    pub other_staff_count: u32,
    #[serde(default)]
    pub other_inventory_count: u32,
    #[serde(default)]
    pub other_cost: i64,
    #[serde(default)]
    pub facility_maintenance: i64,
}

/// One displayed row of the costs screen. `cost_per_unit` is `None` for
/// aggregate rows that have no meaningful per-head figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostRow {
    pub name: String,
    pub cost_per_unit: Option<i64>,
    pub quantity: String,
    pub total: i64,
}

impl CostRow {
    fn new(name: &str, cost_per_unit: Option<i64>, quantity: String, total: i64) -> Self {
        Self {
            name: name.to_string(),
            cost_per_unit,
            quantity,
            total,
        }
    }
}

/// The monthly costs report: craft rentals, salaries, base maintenance and
/// their grand total. The total is always the sum of the displayed rows.
#[derive(Debug, Clone, Default)]
pub struct MonthlyCosts {
    pub craft_rows: Vec<CostRow>,
    pub staff_rows: Vec<CostRow>,
    pub maintenance_rows: Vec<CostRow>,
    pub total: i64,
}

impl MonthlyCosts {
    pub fn tally(ledger: &BaseLedger) -> Self {
        let craft_rows = ledger
            .crafts
            .iter()
            .filter(|craft| craft.rent_cost != 0 && craft.requirements_met)
            .filter(|craft| craft.count > 0 || craft.force_show)
            .map(|craft| {
                CostRow::new(
                    &craft.name,
                    Some(craft.rent_cost),
                    craft.count.to_string(),
                    craft.count as i64 * craft.rent_cost,
                )
            })
            .collect_vec();

        let mut staff_rows = Self::staff_rows(ledger);
        staff_rows.push(CostRow::new(
            UiText::ENGINEERS,
            Some(ledger.engineer_cost),
            ledger.engineers.to_string(),
            ledger.engineers as i64 * ledger.engineer_cost,
        ));
        staff_rows.push(CostRow::new(
            UiText::SCIENTISTS,
            Some(ledger.scientist_cost),
            ledger.scientists.to_string(),
            ledger.scientists as i64 * ledger.scientist_cost,
        ));
        staff_rows.push(CostRow::new(
            UiText::OTHER_EMPLOYEES,
            None,
            format!(
                "{}/{}",
                ledger.other_staff_count, ledger.other_inventory_count
            ),
            ledger.other_cost,
        ));

        let maintenance_rows = vec![CostRow::new(
            UiText::BASE_MAINTENANCE,
            None,
            String::new(),
            ledger.facility_maintenance,
        )];

        let total = craft_rows
            .iter()
            .chain(staff_rows.iter())
            .chain(maintenance_rows.iter())
            .map(|row| row.total)
            .sum();

        Self {
            craft_rows,
            staff_rows,
            maintenance_rows,
            total,
        }
    }

    /// Rows for the named staff types. As soon as any staff type pays by rank
    /// rather than a flat salary, the per-type breakdown stops being
    /// meaningful and all types collapse into one combined row with aggregate
    /// count and cost.
    fn staff_rows(ledger: &BaseLedger) -> Vec<CostRow> {
        let dynamic_salaries = ledger.staff.iter().any(|staff| staff.dynamic_salary);
        if dynamic_salaries {
            let count: u32 = ledger.staff.iter().map(|staff| staff.count).sum();
            let salary: i64 = ledger.staff.iter().map(|staff| staff.total_salary).sum();
            return vec![CostRow::new(
                UiText::SOLDIERS,
                None,
                count.to_string(),
                salary,
            )];
        }

        ledger
            .staff
            .iter()
            .filter(|staff| staff.base_salary != 0 && staff.requirements_met)
            .filter(|staff| staff.count > 0 || ledger.staff.len() == 1)
            .map(|staff| {
                // A lone staff type gets the generic name.
                let name = if ledger.staff.len() == 1 {
                    UiText::SOLDIERS
                } else {
                    staff.name.as_str()
                };
                CostRow::new(
                    name,
                    Some(staff.base_salary),
                    staff.count.to_string(),
                    staff.total_salary,
                )
            })
            .collect_vec()
    }
}

impl Display for MonthlyCosts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .craft_rows
            .iter()
            .chain(self.staff_rows.iter())
            .chain(self.maintenance_rows.iter());
        for row in rows {
            let cost_per_unit = row
                .cost_per_unit
                .map(format_funding)
                .unwrap_or_default();
            writeln!(
                f,
                "{:<24}{:>12}{:>8}{:>14}",
                row.name,
                cost_per_unit,
                row.quantity,
                format_funding(row.total)
            )?;
        }
        writeln!(
            f,
            "{:<24}{:>12}{:>8}{:>14}",
            UiText::TOTAL,
            "",
            "",
            format_funding(self.total)
        )
    }
}
