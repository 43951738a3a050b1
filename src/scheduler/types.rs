use crate::model::{EmployeeId, Slot, SLOT_COUNT};
use thiserror::Error;

/// Options d'assignation
#[derive(Debug, Clone, Copy)]
pub struct AssignOptions {
    /// Tente d'ajouter une 3e personne aux créneaux déjà à 2.
    pub third_pass: bool,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self { third_pass: true }
    }
}

/// Grille de la semaine : créneau → personnes, dans l'ordre d'affectation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    slots: [Vec<EmployeeId>; SLOT_COUNT],
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staff(&self, slot: Slot) -> &[EmployeeId] {
        &self.slots[slot.index()]
    }

    pub fn staff_count(&self, slot: Slot) -> usize {
        self.slots[slot.index()].len()
    }

    pub fn contains(&self, slot: Slot, id: &EmployeeId) -> bool {
        self.slots[slot.index()].contains(id)
    }

    /// Créneaux dans l'ordre de la grille.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[EmployeeId])> + '_ {
        Slot::all().map(move |slot| (slot, self.staff(slot)))
    }

    pub fn total_assignments(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    pub(crate) fn push(&mut self, slot: Slot, id: EmployeeId) {
        self.slots[slot.index()].push(id);
    }

    pub(crate) fn clear(&mut self) {
        for staff in &mut self.slots {
            staff.clear();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    UnderStaffed,    // moins de 2 personnes (0 compris)
    OverStaffed,     // plus de 3 personnes
    OverCapacity,    // plus de 5 jours travaillés
    DuplicateInSlot, // même personne deux fois dans un créneau
    Desync,          // grille et fiche employé ne concordent pas
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub slot: Option<Slot>,
    pub employee: Option<EmployeeId>,
    /// Effectif du créneau ou jours travaillés selon `kind`.
    pub observed: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("invalid shift: {0}")]
    InvalidShift(String),
    #[error("invalid day: {0}")]
    InvalidDay(String),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error("duplicate employee name: {0}")]
    DuplicateName(String),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("unknown demo data set: {0}")]
    UnknownDemo(String),
}
