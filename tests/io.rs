#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use chrono::{TimeZone, Utc};
use shiftplan::{io, Day, Employee, Scheduler, ShiftKind};
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const HEADER: &str = "name,monday,tuesday,wednesday,thursday,friday,saturday,sunday,preset";

fn write_csv(body: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    std::fs::write(&path, body).unwrap();
    (dir, path)
}

fn pair() -> Scheduler {
    let mut s = Scheduler::new();
    s.add_employee(Employee::new("a"));
    s.add_employee(Employee::new("b"));
    s.generate();
    s
}

#[test]
fn import_reads_priorities_gaps_and_presets() {
    let (_dir, path) = write_csv(&format!(
        "{HEADER}\n\
         Alice,m;a,,-;-;evening,,,,,\n\
         Bob,,,,,,,,evenings\n\
         Cara,afternoon,,,,,,,weekdays\n"
    ));

    let employees = io::import_employees_csv(&path).unwrap();
    assert_eq!(employees.len(), 3);

    let alice = &employees[0];
    assert_eq!(alice.name(), "Alice");
    assert_eq!(
        alice.preferences(Day::Monday),
        &[Some(ShiftKind::Morning), Some(ShiftKind::Afternoon)]
    );
    assert!(alice.preferences(Day::Tuesday).is_empty());
    assert_eq!(
        alice.preferences(Day::Wednesday),
        &[None, None, Some(ShiftKind::Evening)]
    );

    let bob = &employees[1];
    assert!(Day::ALL
        .into_iter()
        .all(|day| bob.preferences(day) == [Some(ShiftKind::Evening)]));

    // le préréglage passe après la cellule explicite
    let cara = &employees[2];
    assert_eq!(
        cara.preferences(Day::Monday),
        &[Some(ShiftKind::Afternoon), Some(ShiftKind::Morning)]
    );
    assert_eq!(cara.preferences(Day::Tuesday), &[Some(ShiftKind::Afternoon)]);
    assert!(cara.preferences(Day::Saturday).is_empty());
}

#[test]
fn import_accepts_rows_without_preset_column() {
    let body = "name,Monday,Tuesday,Wednesday,Thursday,Friday,Saturday,Sunday\n\
                Dora,e,e,e,e,e,,\n";
    let employees = io::read_employees_csv(body.as_bytes()).unwrap();

    assert_eq!(employees.len(), 1);
    assert!(employees[0].prefers(Day::Friday, ShiftKind::Evening));
    assert!(!employees[0].has_preferences(Day::Sunday));
}

#[test]
fn import_rejects_duplicate_names() {
    let (_dir, path) = write_csv(&format!("{HEADER}\nAlice,m,,,,,,,\nalice,a,,,,,,,\n"));

    let err = io::import_employees_csv(&path).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("duplicate employee name on row 3: alice"), "{msg}");
}

#[test]
fn import_rejects_unknown_shift_token() {
    let body = format!("{HEADER}\nAlice,night,,,,,,,\n");

    let err = io::read_employees_csv(body.as_bytes()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("invalid Monday preferences for Alice"), "{msg}");
    assert!(msg.contains("invalid shift: night"), "{msg}");
}

#[test]
fn import_rejects_unknown_preset_and_empty_name() {
    let body = format!("{HEADER}\nAlice,,,,,,,,nights\n");
    let msg = format!("{:#}", io::read_employees_csv(body.as_bytes()).unwrap_err());
    assert!(msg.contains("unknown preset: nights"), "{msg}");

    let body = format!("{HEADER}\n,m,,,,,,,\n");
    let msg = format!("{:#}", io::read_employees_csv(body.as_bytes()).unwrap_err());
    assert!(msg.contains("empty name"), "{msg}");
}

#[test]
fn import_checks_day_columns() {
    let body = "name,mon,tue,wed,thu,fri,sat,sun\nAlice,m,,,,,,\n";

    let msg = format!("{:#}", io::read_employees_csv(body.as_bytes()).unwrap_err());
    assert!(msg.contains("expected column 2 to be Monday"), "{msg}");
}

#[test]
fn import_checks_name_and_preset_columns() {
    let body = "person,monday,tuesday,wednesday,thursday,friday,saturday,sunday\nAlice,m,,,,,,\n";
    let msg = format!("{:#}", io::read_employees_csv(body.as_bytes()).unwrap_err());
    assert!(msg.contains("expected column 1 to be name"), "{msg}");

    // une colonne libre ne doit pas être lue comme préréglage
    let body = "name,monday,tuesday,wednesday,thursday,friday,saturday,sunday,notes\n\
                Alice,m,,,,,,,evenings\n";
    let msg = format!("{:#}", io::read_employees_csv(body.as_bytes()).unwrap_err());
    assert!(msg.contains("expected column 9 to be preset"), "{msg}");

    let body = format!("{HEADER},notes\nAlice,m,,,,,,,,late\n");
    let msg = format!("{:#}", io::read_employees_csv(body.as_bytes()).unwrap_err());
    assert!(msg.contains("expected 8 or 9 columns"), "{msg}");
}

#[test]
fn import_rejects_rows_wider_than_header() {
    let body = "name,monday,tuesday,wednesday,thursday,friday,saturday,sunday\n\
                Alice,m,,,,,,,evenings\n";

    let msg = format!("{:#}", io::read_employees_csv(body.as_bytes()).unwrap_err());
    assert!(msg.contains("row 2 has 9 fields, header has 8"), "{msg}");
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let msg = format!("{:#}", io::import_employees_csv(&path).unwrap_err());
    assert!(msg.contains("absent.csv"), "{msg}");
}

#[test]
fn csv_export_has_one_row_per_slot() {
    let s = pair();
    let mut buf = Vec::new();
    io::export_schedule_csv(&mut buf, s.roster(), s.schedule()).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 22);
    assert_eq!(lines[0], "day,shift,staff_count,employees");
    assert_eq!(lines[1], "Monday,Morning,2,a;b");
    assert!(lines.iter().any(|l| l.ends_with(",0,")));
}

#[test]
fn json_export_lists_every_slot() {
    let s = pair();
    let now = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).unwrap();
    let mut buf = Vec::new();
    io::export_schedule_json(&mut buf, s.roster(), s.schedule(), now).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert!(value["generated_at"]
        .as_str()
        .unwrap()
        .starts_with("2025-10-06T08:00:00"));
    assert_eq!(value["employees"], 2);

    let slots = value["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 21);
    assert_eq!(slots[0]["day"], "Monday");
    assert_eq!(slots[0]["shift"], "Morning");
    assert_eq!(slots[0]["staff_count"], 2);
    assert_eq!(slots[0]["employees"], serde_json::json!(["a", "b"]));
}
