use crate::scheduler::SchedError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Nombre minimal de personnes par créneau.
pub const MIN_STAFF_PER_SLOT: usize = 2;
/// Un créneau ne reçoit jamais plus de 3 personnes.
pub const MAX_STAFF_PER_SLOT: usize = 3;
/// Nombre maximal de jours travaillés par semaine.
pub const MAX_DAYS_PER_EMPLOYEE: u8 = 5;

pub const DAY_COUNT: usize = 7;
pub const SHIFT_COUNT: usize = 3;
pub const SLOT_COUNT: usize = DAY_COUNT * SHIFT_COUNT;

/// Jour de la semaine (simple clé d'énumération, aucune notion de date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; DAY_COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepte le nom complet ou l'abréviation sur 3 lettres, sans casse.
impl FromStr for Day {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| {
                let label = d.label().to_ascii_lowercase();
                raw == label || raw == label[..3]
            })
            .ok_or_else(|| SchedError::InvalidDay(s.trim().to_string()))
    }
}

/// Type de créneau dans une journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; SHIFT_COUNT] =
        [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `morning|m|1`, `afternoon|a|2`, `evening|e|3` (sans casse).
impl FromStr for ShiftKind {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" | "m" | "1" => Ok(ShiftKind::Morning),
            "afternoon" | "a" | "2" => Ok(ShiftKind::Afternoon),
            "evening" | "e" | "3" => Ok(ShiftKind::Evening),
            _ => Err(SchedError::InvalidShift(s.trim().to_string())),
        }
    }
}

/// Créneau (jour, type) : l'une des 21 cases de la grille hebdomadaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    pub day: Day,
    pub shift: ShiftKind,
}

impl Slot {
    pub fn new(day: Day, shift: ShiftKind) -> Self {
        Self { day, shift }
    }

    /// Index dans la grille, ordre jour puis créneau.
    pub fn index(self) -> usize {
        self.day.index() * SHIFT_COUNT + self.shift.index()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SLOT_COUNT {
            return None;
        }
        Some(Self {
            day: Day::ALL[index / SHIFT_COUNT],
            shift: ShiftKind::ALL[index % SHIFT_COUNT],
        })
    }

    /// Les 21 créneaux dans l'ordre de la grille.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| ShiftKind::ALL.into_iter().map(move |shift| Slot { day, shift }))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Membre de l'équipe : préférences déclarées et état d'affectation.
///
/// `days_worked` est tenu à jour par `assign_shift`/`clear_assignments`,
/// jamais recalculé.
#[derive(Debug, Clone)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    preferences: [Vec<Option<ShiftKind>>; DAY_COUNT],
    assigned: [Option<ShiftKind>; DAY_COUNT],
    days_worked: u8,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: EmployeeId::random(),
            name: name.into(),
            preferences: Default::default(),
            assigned: [None; DAY_COUNT],
            days_worked: 0,
        }
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ajoute `shift` en fin de liste (priorité la plus basse).
    pub fn add_preference(&mut self, day: Day, shift: ShiftKind) {
        self.preferences[day.index()].push(Some(shift));
    }

    /// Place `shift` au rang `priority` (0 = préféré). Les rangs manquants
    /// sont comblés par des trous (`None`), une entrée existante est écrasée.
    pub fn add_preference_at(&mut self, day: Day, shift: ShiftKind, priority: usize) {
        let prefs = &mut self.preferences[day.index()];
        if prefs.len() <= priority {
            prefs.resize(priority + 1, None);
        }
        prefs[priority] = Some(shift);
    }

    /// Liste brute, trous compris.
    pub fn preferences(&self, day: Day) -> &[Option<ShiftKind>] {
        &self.preferences[day.index()]
    }

    /// Préférences du jour par ordre de priorité, trous ignorés.
    pub fn preferred_shifts(&self, day: Day) -> impl Iterator<Item = ShiftKind> + '_ {
        self.preferences[day.index()].iter().flatten().copied()
    }

    pub fn prefers(&self, day: Day, shift: ShiftKind) -> bool {
        self.preferred_shifts(day).any(|s| s == shift)
    }

    /// Rang (0 = préféré) de la première occurrence de `shift`.
    pub fn preference_rank(&self, day: Day, shift: ShiftKind) -> Option<usize> {
        self.preferences[day.index()]
            .iter()
            .position(|p| *p == Some(shift))
    }

    pub fn has_preferences(&self, day: Day) -> bool {
        self.preferred_shifts(day).next().is_some()
    }

    pub fn is_assigned(&self, day: Day) -> bool {
        self.assigned[day.index()].is_some()
    }

    pub fn assigned_shift(&self, day: Day) -> Option<ShiftKind> {
        self.assigned[day.index()]
    }

    /// Jours affectés, dans l'ordre de la semaine.
    pub fn assigned_days(&self) -> impl Iterator<Item = (Day, ShiftKind)> + '_ {
        Day::ALL
            .into_iter()
            .filter_map(|day| self.assigned[day.index()].map(|shift| (day, shift)))
    }

    pub fn days_worked(&self) -> u8 {
        self.days_worked
    }

    pub fn can_work_more_days(&self) -> bool {
        self.days_worked < MAX_DAYS_PER_EMPLOYEE
    }

    pub fn is_available(&self, day: Day) -> bool {
        !self.is_assigned(day) && self.can_work_more_days()
    }

    /// Sans effet si le jour est déjà pris ou si le quota est atteint.
    pub fn assign_shift(&mut self, day: Day, shift: ShiftKind) {
        if !self.is_available(day) {
            return;
        }
        self.assigned[day.index()] = Some(shift);
        self.days_worked += 1;
    }

    pub fn clear_assignments(&mut self) {
        self.assigned = [None; DAY_COUNT];
        self.days_worked = 0;
    }
}

/// Ensemble des employés, dans l'ordre d'insertion.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute `employee` sauf si son identifiant est déjà présent.
    pub fn add_employee(&mut self, employee: Employee) -> bool {
        if self.employees.iter().any(|e| e.id == employee.id) {
            return false;
        }
        self.employees.push(employee);
        true
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub(crate) fn employees_mut(&mut self) -> &mut [Employee] {
        &mut self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn employee_mut(&mut self, id: &EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| &e.id == id)
    }

    /// Recherche par nom, sans casse.
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        let name = name.trim().to_lowercase();
        self.employees
            .iter()
            .find(|e| e.name.to_lowercase() == name)
    }

    pub fn clear_all(&mut self) {
        for employee in &mut self.employees {
            employee.clear_assignments();
        }
    }
}
