mod assignment;
mod conflicts;
mod selection;
mod types;

pub use types::{AssignOptions, SchedError, Schedule, Violation, ViolationKind};

use crate::model::{Employee, EmployeeId, Roster};

/// Génère une grille à partir de `roster` (état d'affectation réinitialisé
/// puis reconstruit). Ne renvoie jamais d'erreur : un créneau sans candidat
/// reste simplement sous l'effectif minimal.
pub fn generate(roster: &mut Roster, opts: AssignOptions) -> Schedule {
    let mut schedule = Schedule::new();
    assignment::run(roster, &mut schedule, opts);
    schedule
}

/// Scheduler : encapsule un Roster et la dernière grille générée
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
    schedule: Schedule,
    options: AssignOptions,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    pub fn options(&self) -> AssignOptions {
        self.options
    }
    pub fn set_options(&mut self, options: AssignOptions) {
        self.options = options;
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn employees(&self) -> &[Employee] {
        self.roster.employees()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn add_employee(&mut self, employee: Employee) -> bool {
        self.roster.add_employee(employee)
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        for employee in employees {
            self.roster.add_employee(employee);
        }
    }

    /// Crée un employé en refusant un nom déjà pris (sans casse).
    pub fn add_named(&mut self, name: &str) -> Result<EmployeeId, SchedError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchedError::EmptyName);
        }
        if self.roster.find_by_name(name).is_some() {
            return Err(SchedError::DuplicateName(name.to_string()));
        }
        let employee = Employee::new(name);
        let id = employee.id().clone();
        self.roster.add_employee(employee);
        Ok(id)
    }

    pub fn employee_by_name(&self, name: &str) -> Result<&Employee, SchedError> {
        self.roster
            .find_by_name(name)
            .ok_or_else(|| SchedError::UnknownEmployee(name.trim().to_string()))
    }

    /// Remet à zéro les affectations et la grille, préférences conservées.
    pub fn clear_all(&mut self) {
        self.roster.clear_all();
        self.schedule = Schedule::new();
    }

    /// Régénère toute la semaine ; idempotent pour des préférences inchangées.
    pub fn generate(&mut self) -> &Schedule {
        assignment::run(&mut self.roster, &mut self.schedule, self.options);
        &self.schedule
    }

    pub fn detect_violations(&self) -> Vec<Violation> {
        conflicts::detect_violations(self)
    }
}
