//! Jeux de données de démonstration et préréglages de préférences.

use crate::model::{Day, Employee, Roster, ShiftKind};
use crate::scheduler::SchedError;
use std::fmt;
use std::str::FromStr;

/// Préréglage appliqué à un employé (« quick setup »).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Matin, 7 jours
    Mornings,
    /// Après-midi, 7 jours
    Afternoons,
    /// Soir, 7 jours
    Evenings,
    /// Du lundi au vendredi, créneaux alternés
    Weekdays,
    /// Week-end plus quelques jours de semaine
    WeekendFocus,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Mornings,
        Preset::Afternoons,
        Preset::Evenings,
        Preset::Weekdays,
        Preset::WeekendFocus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Mornings => "mornings",
            Preset::Afternoons => "afternoons",
            Preset::Evenings => "evenings",
            Preset::Weekdays => "weekdays",
            Preset::WeekendFocus => "weekend",
        }
    }

    /// Ajoute les préférences du préréglage à la suite des existantes.
    pub fn apply(&self, employee: &mut Employee) {
        match self {
            Preset::Mornings => every_day(employee, ShiftKind::Morning),
            Preset::Afternoons => every_day(employee, ShiftKind::Afternoon),
            Preset::Evenings => every_day(employee, ShiftKind::Evening),
            Preset::Weekdays => {
                for (i, day) in Day::WEEKDAYS.into_iter().enumerate() {
                    employee.add_preference(day, ShiftKind::ALL[i % ShiftKind::ALL.len()]);
                }
            }
            Preset::WeekendFocus => {
                employee.add_preference(Day::Saturday, ShiftKind::Morning);
                employee.add_preference(Day::Saturday, ShiftKind::Afternoon);
                employee.add_preference(Day::Sunday, ShiftKind::Morning);
                employee.add_preference(Day::Sunday, ShiftKind::Afternoon);
                employee.add_preference(Day::Friday, ShiftKind::Evening);
                employee.add_preference(Day::Monday, ShiftKind::Morning);
            }
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mornings" | "morning" | "1" => Ok(Preset::Mornings),
            "afternoons" | "afternoon" | "2" => Ok(Preset::Afternoons),
            "evenings" | "evening" | "3" => Ok(Preset::Evenings),
            "weekdays" | "4" => Ok(Preset::Weekdays),
            "weekend" | "weekend-focus" | "5" => Ok(Preset::WeekendFocus),
            _ => Err(SchedError::UnknownPreset(s.trim().to_string())),
        }
    }
}

fn every_day(employee: &mut Employee, shift: ShiftKind) {
    for day in Day::ALL {
        employee.add_preference(day, shift);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoData {
    /// 6 personnes aux préférences variées
    Small,
    /// 10 personnes réparties en 5 groupes
    Team,
}

impl fmt::Display for DemoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemoData {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(DemoData::Small),
            "team" => Ok(DemoData::Team),
            _ => Err(SchedError::UnknownDemo(s.trim().to_string())),
        }
    }
}

impl DemoData {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoData::Small => "small",
            DemoData::Team => "team",
        }
    }

    pub fn roster(&self) -> Roster {
        let employees = match self {
            DemoData::Small => small(),
            DemoData::Team => team(),
        };
        let mut roster = Roster::new();
        for employee in employees {
            roster.add_employee(employee);
        }
        roster
    }
}

fn with_preset(name: &str, preset: Preset) -> Employee {
    let mut employee = Employee::new(name);
    preset.apply(&mut employee);
    employee
}

fn small() -> Vec<Employee> {
    use Day::*;
    use ShiftKind::*;

    let mut diana = Employee::new("Diana");
    for (day, shift) in [
        (Monday, Morning),
        (Tuesday, Afternoon),
        (Wednesday, Evening),
        (Thursday, Morning),
        (Friday, Afternoon),
        (Saturday, Evening),
        (Sunday, Morning),
    ] {
        diana.add_preference(day, shift);
    }

    // ordre de priorité explicite, jour par jour
    let mut eve = Employee::new("Eve");
    for (day, order) in [
        (Monday, [Morning, Afternoon, Evening]),
        (Tuesday, [Afternoon, Evening, Morning]),
        (Wednesday, [Evening, Morning, Afternoon]),
        (Thursday, [Morning, Afternoon, Evening]),
        (Friday, [Afternoon, Evening, Morning]),
        (Saturday, [Evening, Morning, Afternoon]),
        (Sunday, [Morning, Afternoon, Evening]),
    ] {
        for (priority, shift) in order.into_iter().enumerate() {
            eve.add_preference_at(day, shift, priority);
        }
    }

    let mut frank = Employee::new("Frank");
    for (day, shift) in [
        (Monday, Morning),
        (Wednesday, Afternoon),
        (Friday, Evening),
        (Saturday, Morning),
        (Sunday, Afternoon),
    ] {
        frank.add_preference(day, shift);
    }

    vec![
        with_preset("Alice", Preset::Mornings),
        with_preset("Bob", Preset::Afternoons),
        with_preset("Charlie", Preset::Evenings),
        diana,
        eve,
        frank,
    ]
}

fn team() -> Vec<Employee> {
    let mut out = vec![
        with_preset("Hugo", Preset::Mornings),
        with_preset("Lina", Preset::Mornings),
        with_preset("Noah", Preset::Afternoons),
        with_preset("Maya", Preset::Afternoons),
        with_preset("Ines", Preset::Evenings),
        with_preset("Theo", Preset::Evenings),
    ];

    // semaine uniquement, tous créneaux
    for name in ["Sara", "Yann"] {
        let mut employee = Employee::new(name);
        for day in Day::WEEKDAYS {
            for shift in ShiftKind::ALL {
                employee.add_preference(day, shift);
            }
        }
        out.push(employee);
    }

    // plutôt la semaine, un créneau le week-end
    for (name, weekday_shifts, weekend_shift) in [
        ("Leo", [ShiftKind::Morning, ShiftKind::Afternoon], ShiftKind::Morning),
        ("Zoe", [ShiftKind::Afternoon, ShiftKind::Evening], ShiftKind::Evening),
    ] {
        let mut employee = Employee::new(name);
        for day in Day::WEEKDAYS {
            for shift in weekday_shifts {
                employee.add_preference(day, shift);
            }
        }
        employee.add_preference(Day::Saturday, weekend_shift);
        employee.add_preference(Day::Sunday, weekend_shift);
        out.push(employee);
    }

    out
}
