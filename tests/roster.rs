#![forbid(unsafe_code)]
use shiftplan::{Day, DemoData, Employee, Preset, Roster, SchedError, Scheduler, ShiftKind, Slot};

#[test]
fn preferences_keep_priority_order() {
    let mut e = Employee::new("alice");
    e.add_preference(Day::Monday, ShiftKind::Evening);
    e.add_preference(Day::Monday, ShiftKind::Morning);

    assert_eq!(
        e.preferences(Day::Monday),
        &[Some(ShiftKind::Evening), Some(ShiftKind::Morning)]
    );
    assert_eq!(e.preference_rank(Day::Monday, ShiftKind::Morning), Some(1));
    assert!(e.prefers(Day::Monday, ShiftKind::Evening));
    assert!(!e.prefers(Day::Monday, ShiftKind::Afternoon));
    assert!(!e.has_preferences(Day::Tuesday));
}

#[test]
fn priority_insert_pads_with_gaps() {
    let mut e = Employee::new("eve");
    e.add_preference_at(Day::Monday, ShiftKind::Evening, 2);

    assert_eq!(
        e.preferences(Day::Monday),
        &[None, None, Some(ShiftKind::Evening)]
    );
    let scanned: Vec<ShiftKind> = e.preferred_shifts(Day::Monday).collect();
    assert_eq!(scanned, vec![ShiftKind::Evening]);
    assert_eq!(e.preference_rank(Day::Monday, ShiftKind::Evening), Some(2));
    assert!(e.has_preferences(Day::Monday));

    // remplit un trou sans toucher au reste
    e.add_preference_at(Day::Monday, ShiftKind::Morning, 0);
    assert_eq!(
        e.preferences(Day::Monday),
        &[Some(ShiftKind::Morning), None, Some(ShiftKind::Evening)]
    );

    // écrase l'entrée existante
    e.add_preference_at(Day::Monday, ShiftKind::Afternoon, 2);
    assert_eq!(
        e.preferences(Day::Monday),
        &[Some(ShiftKind::Morning), None, Some(ShiftKind::Afternoon)]
    );
}

#[test]
fn assign_shift_is_once_per_day() {
    let mut e = Employee::new("bob");
    e.assign_shift(Day::Monday, ShiftKind::Morning);
    e.assign_shift(Day::Monday, ShiftKind::Evening);

    assert_eq!(e.days_worked(), 1);
    assert_eq!(e.assigned_shift(Day::Monday), Some(ShiftKind::Morning));
    assert!(!e.is_available(Day::Monday));
    assert!(e.is_available(Day::Tuesday));
}

#[test]
fn assign_shift_stops_at_five_days() {
    let mut e = Employee::new("carol");
    for day in Day::ALL {
        e.assign_shift(day, ShiftKind::Afternoon);
    }

    assert_eq!(e.days_worked(), 5);
    assert!(!e.can_work_more_days());
    assert!(!e.is_available(Day::Saturday));
    assert_eq!(e.assigned_shift(Day::Saturday), None);
    assert_eq!(e.assigned_days().count(), 5);
}

#[test]
fn clear_assignments_keeps_preferences() {
    let mut e = Employee::new("dan");
    e.add_preference(Day::Friday, ShiftKind::Evening);
    e.assign_shift(Day::Friday, ShiftKind::Evening);

    e.clear_assignments();
    assert_eq!(e.days_worked(), 0);
    assert_eq!(e.assigned_shift(Day::Friday), None);
    assert_eq!(e.preferences(Day::Friday), &[Some(ShiftKind::Evening)]);
}

#[test]
fn roster_deduplicates_by_identity_not_name() {
    let mut roster = Roster::new();
    let a = Employee::new("Alice");
    let twin = Employee::new("Alice");

    assert!(roster.add_employee(a.clone()));
    assert!(!roster.add_employee(a.clone()));
    assert!(roster.add_employee(twin));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.employees()[0].id(), a.id());
    assert_ne!(roster.employees()[0].id(), roster.employees()[1].id());
}

#[test]
fn roster_clear_all_resets_every_employee() {
    let mut roster = Roster::new();
    let mut a = Employee::new("a");
    a.assign_shift(Day::Monday, ShiftKind::Morning);
    let mut b = Employee::new("b");
    b.assign_shift(Day::Sunday, ShiftKind::Evening);
    roster.add_employee(a);
    roster.add_employee(b);

    roster.clear_all();
    assert!(roster.employees().iter().all(|e| e.days_worked() == 0));
}

#[test]
fn find_by_name_ignores_case() {
    let mut roster = Roster::new();
    roster.add_employee(Employee::new("Élodie"));
    roster.add_employee(Employee::new("Bob"));

    assert_eq!(roster.find_by_name("bob").map(|e| e.name()), Some("Bob"));
    assert_eq!(roster.find_by_name(" ÉLODIE ").map(|e| e.name()), Some("Élodie"));
    assert!(roster.find_by_name("carol").is_none());
}

#[test]
fn scheduler_rejects_duplicate_names() {
    let mut s = Scheduler::new();
    s.add_named("Alice").unwrap();

    assert!(matches!(
        s.add_named("alice"),
        Err(SchedError::DuplicateName(name)) if name == "alice"
    ));
    assert!(matches!(s.add_named("   "), Err(SchedError::EmptyName)));
    assert!(matches!(
        s.employee_by_name("zed"),
        Err(SchedError::UnknownEmployee(_))
    ));
    assert_eq!(s.employees().len(), 1);
}

#[test]
fn parses_shift_and_day_tokens() {
    assert_eq!("m".parse::<ShiftKind>().unwrap(), ShiftKind::Morning);
    assert_eq!("Afternoon".parse::<ShiftKind>().unwrap(), ShiftKind::Afternoon);
    assert_eq!("3".parse::<ShiftKind>().unwrap(), ShiftKind::Evening);
    assert!(matches!(
        "night".parse::<ShiftKind>(),
        Err(SchedError::InvalidShift(_))
    ));

    assert_eq!("wed".parse::<Day>().unwrap(), Day::Wednesday);
    assert_eq!("SUNDAY".parse::<Day>().unwrap(), Day::Sunday);
    assert!(matches!("funday".parse::<Day>(), Err(SchedError::InvalidDay(_))));
}

#[test]
fn slots_follow_grid_order() {
    let slots: Vec<Slot> = Slot::all().collect();
    assert_eq!(slots.len(), 21);
    assert_eq!(slots[0], Slot::new(Day::Monday, ShiftKind::Morning));
    assert_eq!(slots[5], Slot::new(Day::Tuesday, ShiftKind::Evening));
    assert_eq!(slots[20].index(), 20);
    assert_eq!(Slot::from_index(21), None);
    assert_eq!(slots[7].to_string(), "Wednesday Afternoon");
}

#[test]
fn presets_append_after_existing_preferences() {
    assert_eq!("5".parse::<Preset>().unwrap(), Preset::WeekendFocus);
    assert_eq!("Weekdays".parse::<Preset>().unwrap(), Preset::Weekdays);
    assert!(matches!(
        "nights".parse::<Preset>(),
        Err(SchedError::UnknownPreset(_))
    ));

    let mut e = Employee::new("wes");
    e.add_preference(Day::Monday, ShiftKind::Evening);
    Preset::WeekendFocus.apply(&mut e);

    assert_eq!(
        e.preferences(Day::Saturday),
        &[Some(ShiftKind::Morning), Some(ShiftKind::Afternoon)]
    );
    assert_eq!(
        e.preferences(Day::Monday),
        &[Some(ShiftKind::Evening), Some(ShiftKind::Morning)]
    );
    assert!(!e.has_preferences(Day::Wednesday));
}

#[test]
fn demo_sets_by_name() {
    let small = "small".parse::<DemoData>().unwrap().roster();
    assert_eq!(small.len(), 6);
    assert!(small.find_by_name("eve").unwrap().has_preferences(Day::Sunday));

    assert_eq!(" Team ".parse::<DemoData>().unwrap().roster().len(), 10);
    assert!(matches!(
        "huge".parse::<DemoData>(),
        Err(SchedError::UnknownDemo(_))
    ));
}

#[test]
fn preset_and_demo_names_round_trip() {
    for preset in Preset::ALL {
        assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
    }
    assert_eq!(Preset::WeekendFocus.to_string(), "weekend");

    for demo in [DemoData::Small, DemoData::Team] {
        assert_eq!(demo.to_string().parse::<DemoData>().unwrap(), demo);
    }
    assert_eq!(DemoData::Team.as_str(), "team");
}

#[test]
fn errors_keep_the_rejected_input() {
    assert_eq!(
        " night ".parse::<ShiftKind>(),
        Err(SchedError::InvalidShift("night".to_string()))
    );
    assert_eq!(
        "someday".parse::<Day>(),
        Err(SchedError::InvalidDay("someday".to_string()))
    );
    assert_eq!(
        "nights".parse::<Preset>(),
        Err(SchedError::UnknownPreset("nights".to_string()))
    );

    let mut s = Scheduler::new();
    s.add_named("Alice").unwrap();
    assert_eq!(
        s.add_named(" ALICE "),
        Err(SchedError::DuplicateName("ALICE".to_string()))
    );
}
