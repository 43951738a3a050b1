use super::Schedule;
use crate::model::{Roster, Slot, SLOT_COUNT};

/// Nombre d'employés dont la liste du jour contient le créneau (ordre et
/// trous ignorés), indexé par `Slot::index`.
pub(super) fn popularity(roster: &Roster) -> [usize; SLOT_COUNT] {
    let mut counts = [0usize; SLOT_COUNT];
    for slot in Slot::all() {
        counts[slot.index()] = roster
            .employees()
            .iter()
            .filter(|e| e.prefers(slot.day, slot.shift))
            .count();
    }
    counts
}

/// Choisit la personne à placer sur `slot`, renvoie son rang dans le roster.
///
/// Candidats : disponibles ce jour-là et absents du créneau. Ceux qui ont
/// le créneau en préférence passent d'abord ; ensuite le moins de jours
/// travaillés, puis l'ordre d'insertion (`min_by_key` garde le premier).
pub(super) fn pick_best(roster: &Roster, schedule: &Schedule, slot: Slot) -> Option<usize> {
    let candidates = || {
        roster
            .employees()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_available(slot.day) && !schedule.contains(slot, e.id()))
    };

    candidates()
        .filter(|(_, e)| e.prefers(slot.day, slot.shift))
        .min_by_key(|(_, e)| e.days_worked())
        .or_else(|| candidates().min_by_key(|(_, e)| e.days_worked()))
        .map(|(idx, _)| idx)
}
