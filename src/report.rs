use crate::model::{
    Day, Employee, EmployeeId, Roster, ShiftKind, Slot, MAX_DAYS_PER_EMPLOYEE,
    MAX_STAFF_PER_SLOT, MIN_STAFF_PER_SLOT, SHIFT_COUNT, SLOT_COUNT,
};
use crate::scheduler::{Schedule, Scheduler, Violation, ViolationKind};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

const DAY_COLUMN_WIDTH: usize = 12;
const MIN_SHIFT_COLUMN_WIDTH: usize = 15;
const MAX_SHIFT_COLUMN_WIDTH: usize = 60;

/// Noms des personnes d'un créneau, dans l'ordre d'affectation.
pub(crate) fn staff_names<'a>(roster: &'a Roster, staff: &[EmployeeId]) -> Vec<&'a str> {
    staff
        .iter()
        .map(|id| roster.employee(id).map(Employee::name).unwrap_or("?"))
        .collect()
}

/// Permet de customiser le rendu de la grille (tableau, résumé, etc.).
pub trait ScheduleRenderer {
    fn render(&self, roster: &Roster, schedule: &Schedule) -> String;
}

/// Tableau hebdomadaire : une ligne par jour, une colonne par créneau.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableRenderer;

impl TableRenderer {
    /// Largeur de chaque colonne créneau : libellé + 2, au moins 15,
    /// élargie aux noms affichés, plafonnée à 60.
    pub fn column_widths(roster: &Roster, schedule: &Schedule) -> [usize; SHIFT_COUNT] {
        let mut widths =
            ShiftKind::ALL.map(|shift| (shift.label().len() + 2).max(MIN_SHIFT_COLUMN_WIDTH));
        for (slot, staff) in schedule.iter() {
            if staff.is_empty() {
                continue;
            }
            let shown = staff_names(roster, staff).join(", ").chars().count() + 2;
            let width = &mut widths[slot.shift.index()];
            *width = (*width).max(shown);
        }
        widths.map(|w| w.min(MAX_SHIFT_COLUMN_WIDTH))
    }
}

impl ScheduleRenderer for TableRenderer {
    fn render(&self, roster: &Roster, schedule: &Schedule) -> String {
        let widths = Self::column_widths(roster, schedule);
        let mut out = String::from("=== WEEKLY EMPLOYEE SCHEDULE ===\n\n");

        let _ = write!(out, "{:<w$}", "Day", w = DAY_COLUMN_WIDTH);
        for shift in ShiftKind::ALL {
            let _ = write!(out, "{:<w$}", shift.label(), w = widths[shift.index()]);
        }
        out.push('\n');
        out.push_str(&"-".repeat(DAY_COLUMN_WIDTH + widths.iter().sum::<usize>()));
        out.push('\n');

        for day in Day::ALL {
            let _ = write!(out, "{:<w$}", day.label(), w = DAY_COLUMN_WIDTH);
            for shift in ShiftKind::ALL {
                let staff = schedule.staff(Slot::new(day, shift));
                let names = if staff.is_empty() {
                    "None".to_string()
                } else {
                    staff_names(roster, staff).join(", ")
                };
                let _ = write!(out, "{:<w$}", names, w = widths[shift.index()]);
            }
            out.push('\n');
        }
        out
    }
}

/// Récapitulatif chiffré, façon export.
#[derive(Debug, Clone, Copy)]
pub struct OverviewRenderer {
    pub generated_at: DateTime<Utc>,
}

impl ScheduleRenderer for OverviewRenderer {
    fn render(&self, roster: &Roster, schedule: &Schedule) -> String {
        let employees = roster.len();
        let assigned = total_assigned_days(roster);
        let mut out = String::from("=== SCHEDULE EXPORT SUMMARY ===\n");
        let _ = writeln!(out, "Generated on: {}", self.generated_at.to_rfc3339());
        out.push_str("\nSummary Statistics:\n");
        let _ = writeln!(out, "- Total employees: {employees}");
        let _ = writeln!(out, "- Total assigned days: {assigned}");
        let _ = writeln!(
            out,
            "- Average days per employee: {:.1}",
            average(assigned, employees)
        );

        out.push_str("\nSchedule Overview:\n");
        let mut count = itoa::Buffer::new();
        for day in Day::ALL {
            let mut line = format!("{:<10}:", day.label());
            for shift in ShiftKind::ALL {
                line.push(' ');
                line.push_str(&shift.label()[..3]);
                line.push('(');
                line.push_str(count.format(schedule.staff_count(Slot::new(day, shift))));
                line.push(')');
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub name: String,
    pub days_worked: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageStats {
    pub total: usize,
    pub covered: usize,
    pub fully_staffed: usize,
}

impl CoverageStats {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut stats = Self {
            total: SLOT_COUNT,
            covered: 0,
            fully_staffed: 0,
        };
        for (_, staff) in schedule.iter() {
            if !staff.is_empty() {
                stats.covered += 1;
            }
            if staff.len() >= MIN_STAFF_PER_SLOT {
                stats.fully_staffed += 1;
            }
        }
        stats
    }

    pub fn covered_pct(&self) -> f64 {
        self.covered as f64 * 100.0 / self.total as f64
    }

    pub fn fully_staffed_pct(&self) -> f64 {
        self.fully_staffed as f64 * 100.0 / self.total as f64
    }
}

/// Charge par employé, couverture et écarts aux contraintes.
#[derive(Debug, Clone)]
pub struct Summary {
    pub workload: Vec<Workload>,
    pub coverage: CoverageStats,
    pub violations: Vec<Violation>,
    pub total_assigned_days: usize,
}

impl Summary {
    pub fn build(scheduler: &Scheduler) -> Self {
        let roster = scheduler.roster();
        Self {
            workload: roster
                .employees()
                .iter()
                .map(|e| Workload {
                    name: e.name().to_string(),
                    days_worked: e.days_worked(),
                })
                .collect(),
            coverage: CoverageStats::from_schedule(scheduler.schedule()),
            violations: scheduler.detect_violations(),
            total_assigned_days: total_assigned_days(roster),
        }
    }

    pub fn average_days(&self) -> f64 {
        average(self.total_assigned_days, self.workload.len())
    }

    pub fn render(&self, roster: &Roster) -> String {
        let mut out = String::from("=== SCHEDULE SUMMARY ===\nEmployee Workload:\n");
        for w in &self.workload {
            let _ = writeln!(out, "  {}: {} days worked", w.name, w.days_worked);
        }

        let c = &self.coverage;
        out.push_str("\nCoverage Analysis:\n");
        let _ = writeln!(out, "  Total shifts: {}", c.total);
        let _ = writeln!(
            out,
            "  Covered shifts: {} ({:.1}%)",
            c.covered,
            c.covered_pct()
        );
        let _ = writeln!(
            out,
            "  Fully staffed shifts: {} ({:.1}%)",
            c.fully_staffed,
            c.fully_staffed_pct()
        );

        out.push_str("\nConstraint Violations:\n");
        if self.violations.is_empty() {
            out.push_str("  No constraint violations found.\n");
        }
        for v in &self.violations {
            let _ = writeln!(out, "  WARNING: {}", describe_violation(roster, v));
        }
        out
    }
}

pub fn describe_violation(roster: &Roster, v: &Violation) -> String {
    let name = v
        .employee
        .as_ref()
        .and_then(|id| roster.employee(id))
        .map(Employee::name)
        .unwrap_or("?");
    let slot = v
        .slot
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    match v.kind {
        ViolationKind::UnderStaffed => format!(
            "{slot} shift has only {} employee(s) (minimum {MIN_STAFF_PER_SLOT} required)",
            v.observed
        ),
        ViolationKind::OverStaffed => format!(
            "{slot} shift has {} employees (maximum {MAX_STAFF_PER_SLOT})",
            v.observed
        ),
        ViolationKind::OverCapacity => format!(
            "{name} works {} days (exceeds limit of {MAX_DAYS_PER_EMPLOYEE})",
            v.observed
        ),
        ViolationKind::DuplicateInSlot => format!("{name} is listed twice in {slot}"),
        ViolationKind::Desync => format!("{name} assignment for {slot} is out of sync"),
    }
}

/// Fiche détaillée de chaque employé : affectations puis préférences.
pub fn employee_details(roster: &Roster) -> String {
    let mut out = String::from("=== EMPLOYEE DETAILS ===\n");
    for e in roster.employees() {
        out.push('\n');
        out.push_str(&employee_detail(e));
    }
    out
}

pub fn employee_detail(e: &Employee) -> String {
    let mut out = format!("{}:\n", e.name());
    let _ = writeln!(
        out,
        "  Days worked: {}/{MAX_DAYS_PER_EMPLOYEE}",
        e.days_worked()
    );

    if e.days_worked() > 0 {
        out.push_str("  Assigned shifts:\n");
        for (day, shift) in e.assigned_days() {
            let _ = writeln!(out, "    {day}: {shift}");
        }
    }

    out.push_str("  Preferences:\n");
    let mut any = false;
    for day in Day::ALL {
        let prefs = e.preferences(day);
        if prefs.is_empty() {
            continue;
        }
        any = true;
        // trous affichés `-`
        let listed: Vec<&str> = prefs
            .iter()
            .map(|p| match p {
                Some(shift) => shift.label(),
                None => "-",
            })
            .collect();
        let _ = writeln!(out, "    {day}: {}", listed.join(", "));
    }
    if !any {
        out.push_str("    No preferences set\n");
    }
    out
}

fn total_assigned_days(roster: &Roster) -> usize {
    roster
        .employees()
        .iter()
        .map(|e| usize::from(e.days_worked()))
        .sum()
}

fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
