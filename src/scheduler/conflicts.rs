use super::{Scheduler, Violation, ViolationKind};
use crate::model::{Slot, MAX_DAYS_PER_EMPLOYEE, MAX_STAFF_PER_SLOT, MIN_STAFF_PER_SLOT};

pub(super) fn detect_violations(scheduler: &Scheduler) -> Vec<Violation> {
    let mut out = Vec::new();
    let roster = &scheduler.roster;
    let schedule = &scheduler.schedule;

    for employee in roster.employees() {
        if employee.days_worked() > MAX_DAYS_PER_EMPLOYEE {
            out.push(Violation {
                kind: ViolationKind::OverCapacity,
                slot: None,
                employee: Some(employee.id().clone()),
                observed: usize::from(employee.days_worked()),
            });
        }
    }

    for (slot, staff) in schedule.iter() {
        let count = staff.len();
        if count < MIN_STAFF_PER_SLOT {
            out.push(Violation {
                kind: ViolationKind::UnderStaffed,
                slot: Some(slot),
                employee: None,
                observed: count,
            });
        }
        if count > MAX_STAFF_PER_SLOT {
            out.push(Violation {
                kind: ViolationKind::OverStaffed,
                slot: Some(slot),
                employee: None,
                observed: count,
            });
        }

        for (idx, id) in staff.iter().enumerate() {
            if staff[..idx].contains(id) {
                out.push(Violation {
                    kind: ViolationKind::DuplicateInSlot,
                    slot: Some(slot),
                    employee: Some(id.clone()),
                    observed: count,
                });
                continue;
            }
            let recorded = roster
                .employee(id)
                .and_then(|e| e.assigned_shift(slot.day));
            if recorded != Some(slot.shift) {
                out.push(Violation {
                    kind: ViolationKind::Desync,
                    slot: Some(slot),
                    employee: Some(id.clone()),
                    observed: count,
                });
            }
        }
    }

    // sens inverse : affectation enregistrée côté employé mais absente de la grille
    for employee in roster.employees() {
        for (day, shift) in employee.assigned_days() {
            let slot = Slot::new(day, shift);
            if !schedule.contains(slot, employee.id()) {
                out.push(Violation {
                    kind: ViolationKind::Desync,
                    slot: Some(slot),
                    employee: Some(employee.id().clone()),
                    observed: schedule.staff_count(slot),
                });
            }
        }
    }

    out
}
