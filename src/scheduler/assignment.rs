use super::{selection, AssignOptions, Schedule};
use crate::model::{Roster, Slot, MAX_STAFF_PER_SLOT, MIN_STAFF_PER_SLOT};
use std::cmp::Reverse;

/// Reconstruit entièrement `schedule` à partir des préférences du roster.
/// Renvoie le nombre total d'affectations.
pub(super) fn run(roster: &mut Roster, schedule: &mut Schedule, opts: AssignOptions) -> usize {
    roster.clear_all();
    schedule.clear();

    // préférences figées pendant la génération : calcul unique
    let popularity = selection::popularity(roster);

    // Phase 1 : minimum d'effectif, créneaux les moins demandés d'abord
    let mut order: Vec<Slot> = Slot::all().collect();
    order.sort_by_key(|slot| popularity[slot.index()]);
    let mut placed = 0usize;
    for slot in order {
        placed += fill_to(roster, schedule, slot, MIN_STAFF_PER_SLOT);
    }
    #[cfg(feature = "logging")]
    tracing::debug!(placed, "minimum staffing pass done");

    // Phase 2 : comblement des trous, ordre de la grille
    let mut gaps = 0usize;
    for slot in Slot::all() {
        gaps += fill_to(roster, schedule, slot, MIN_STAFF_PER_SLOT);
    }
    #[cfg(feature = "logging")]
    tracing::debug!(placed = gaps, "gap-fill pass done");

    // Phase 3 : 3e personne, créneaux les plus demandés d'abord
    let mut thirds = 0usize;
    if opts.third_pass {
        let mut order: Vec<Slot> = Slot::all()
            .filter(|slot| schedule.staff_count(*slot) == MIN_STAFF_PER_SLOT)
            .collect();
        order.sort_by_key(|slot| Reverse(popularity[slot.index()]));
        for slot in order {
            thirds += fill_to(roster, schedule, slot, MAX_STAFF_PER_SLOT);
        }
        #[cfg(feature = "logging")]
        tracing::debug!(placed = thirds, "third-person pass done");
    }

    let total = placed + gaps + thirds;
    #[cfg(feature = "logging")]
    tracing::info!(employees = roster.len(), assignments = total, "schedule generated");
    total
}

/// Complète `slot` jusqu'à `target` personnes tant qu'un candidat existe.
fn fill_to(roster: &mut Roster, schedule: &mut Schedule, slot: Slot, target: usize) -> usize {
    let mut added = 0usize;
    while schedule.staff_count(slot) < target {
        let Some(idx) = selection::pick_best(roster, schedule, slot) else {
            break;
        };
        if !assign(roster, schedule, idx, slot) {
            break;
        }
        added += 1;
    }
    added
}

fn assign(roster: &mut Roster, schedule: &mut Schedule, idx: usize, slot: Slot) -> bool {
    let employee = &mut roster.employees_mut()[idx];
    if !employee.is_available(slot.day) || schedule.contains(slot, employee.id()) {
        return false;
    }
    employee.assign_shift(slot.day, slot.shift);
    schedule.push(slot, employee.id().clone());

    #[cfg(feature = "logging")]
    tracing::trace!(employee = employee.name(), %slot, "assigned");
    true
}
