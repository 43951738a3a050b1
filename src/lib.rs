#![forbid(unsafe_code)]
//! Shiftplan : bibliothèque de planification hebdomadaire d'équipe (sans BD).
//!
//! - 7 jours × 3 créneaux (matin, après-midi, soir).
//! - Au moins 2 personnes par créneau, au plus 5 jours par personne,
//!   un seul créneau par jour.
//! - Allocation gloutonne en trois passes guidée par les préférences.
//! - Import CSV, exports JSON/CSV et rapports texte en dehors du moteur.

pub mod demo;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;

pub use demo::{DemoData, Preset};
pub use model::{
    Day, Employee, EmployeeId, Roster, ShiftKind, Slot, MAX_DAYS_PER_EMPLOYEE,
    MAX_STAFF_PER_SLOT, MIN_STAFF_PER_SLOT,
};
pub use report::{
    employee_detail, employee_details, CoverageStats, OverviewRenderer, ScheduleRenderer,
    Summary, TableRenderer,
};
pub use scheduler::{
    generate, AssignOptions, SchedError, Schedule, Scheduler, Violation, ViolationKind,
};
