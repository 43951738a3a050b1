use crate::demo::Preset;
use crate::model::{Day, Employee, Roster, ShiftKind};
use crate::report::staff_names;
use crate::scheduler::Schedule;
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Import d'employés depuis CSV :
/// header `name,monday,...,sunday[,preset]`.
///
/// Une cellule jour est une liste `;` par priorité décroissante (`m;a`),
/// `-` ou un élément vide laisse un trou à ce rang (`-;-;evening`).
/// Le préréglage éventuel s'ajoute après les préférences explicites.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_employees_csv(file).with_context(|| format!("parsing {}", path.display()))
}

pub fn read_employees_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let first = headers.get(0).unwrap_or("");
    if !first.eq_ignore_ascii_case("name") {
        bail!("expected column 1 to be name, found {first:?}");
    }
    match headers.len() {
        8 => {}
        9 => {
            let last = headers.get(8).unwrap_or("");
            if !last.eq_ignore_ascii_case("preset") {
                bail!("expected column 9 to be preset, found {last:?}");
            }
        }
        n => bail!("expected 8 or 9 columns (name, 7 days, optional preset), found {n}"),
    }
    for day in Day::ALL {
        let column = headers.get(1 + day.index()).unwrap_or("");
        if !column.eq_ignore_ascii_case(day.label()) {
            bail!("expected column {} to be {}, found {column:?}", 2 + day.index(), day.label());
        }
    }

    let mut out: Vec<Employee> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = row + 2;
        if rec.len() > headers.len() {
            bail!(
                "row {line} has {} fields, header has {}",
                rec.len(),
                headers.len()
            );
        }
        let name = rec.get(0).context("missing name")?;
        if name.is_empty() {
            bail!("invalid employee row {line} (empty name)");
        }
        let lowered = name.to_lowercase();
        if out.iter().any(|e| e.name().to_lowercase() == lowered) {
            bail!("duplicate employee name on row {line}: {name}");
        }

        let mut employee = Employee::new(name);
        for day in Day::ALL {
            if let Some(cell) = rec.get(1 + day.index()) {
                parse_day_cell(&mut employee, day, cell)
                    .with_context(|| format!("invalid {day} preferences for {name}"))?;
            }
        }
        if let Some(raw) = rec.get(8).filter(|raw| !raw.is_empty()) {
            let preset: Preset = raw
                .parse()
                .with_context(|| format!("invalid preset for {name}"))?;
            preset.apply(&mut employee);
        }
        out.push(employee);
    }
    Ok(out)
}

fn parse_day_cell(employee: &mut Employee, day: Day, cell: &str) -> anyhow::Result<()> {
    if cell.trim().is_empty() {
        return Ok(());
    }
    for (priority, token) in cell.split(';').map(str::trim).enumerate() {
        if token.is_empty() || token == "-" {
            continue;
        }
        let shift: ShiftKind = token.parse()?;
        employee.add_preference_at(day, shift, priority);
    }
    Ok(())
}

#[derive(Serialize)]
struct SlotExport<'a> {
    day: Day,
    shift: ShiftKind,
    staff_count: usize,
    employees: Vec<&'a str>,
}

#[derive(Serialize)]
struct ScheduleExport<'a> {
    generated_at: DateTime<Utc>,
    employees: usize,
    slots: Vec<SlotExport<'a>>,
}

/// Export JSON de la grille (jolie mise en forme)
pub fn export_schedule_json<W: Write>(
    writer: W,
    roster: &Roster,
    schedule: &Schedule,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let export = ScheduleExport {
        generated_at: now,
        employees: roster.len(),
        slots: schedule
            .iter()
            .map(|(slot, staff)| SlotExport {
                day: slot.day,
                shift: slot.shift,
                staff_count: staff.len(),
                employees: staff_names(roster, staff),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}

/// Export CSV de la grille : header `day,shift,staff_count,employees`
pub fn export_schedule_csv<W: Write>(
    writer: W,
    roster: &Roster,
    schedule: &Schedule,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["day", "shift", "staff_count", "employees"])?;
    let mut count = itoa::Buffer::new();
    for (slot, staff) in schedule.iter() {
        let names = staff_names(roster, staff).join(";");
        w.write_record([
            slot.day.label(),
            slot.shift.label(),
            count.format(staff.len()),
            names.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
