use grade_ledger::output::read_csv;
use grade_ledger::{Grade, Ledger, LedgerError};
use std::fs;

#[test]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.csv");

    let mut ledger = Ledger::new();
    let asha = ledger.submit("Asha", "85, 90, 95").unwrap();
    let ravi = ledger.submit("Ravi", "40, 55, 60").unwrap();

    assert_eq!(asha.average, 90.0);
    assert_eq!(asha.grade, Grade::APlus);
    assert!((ravi.average - 51.67).abs() < 0.01);
    assert_eq!(ravi.grade, Grade::C);

    let table = ledger.to_table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].name, "Asha");
    assert_eq!(table.rows()[1].name, "Ravi");

    ledger.export_csv(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Name,Marks,Average,Grade\n\
         Asha,\"85, 90, 95\",90.0,A+\n\
         Ravi,\"40, 55, 60\",51.67,C\n"
    );
}

#[test]
fn test_round_trip_preserves_name_average_grade() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.csv");

    let mut ledger = Ledger::new();
    for (name, marks) in [
        ("Asha", vec![85, 90, 95]),
        ("Ravi", vec![40, 55, 60]),
        ("Meera", vec![69, 70]),
        ("Asha", vec![100]),
        ("Tom", vec![1, 2]),
    ] {
        ledger.add(name, marks).unwrap();
    }

    ledger.export_csv(&path).unwrap();
    let read = read_csv(&path).unwrap();
    let expected = ledger.to_table();

    assert_eq!(read.len(), expected.len());
    for (got, want) in read.rows().iter().zip(expected.rows()) {
        assert_eq!(got.name, want.name);
        assert_eq!(got.average_text(), want.average_text());
        assert_eq!(got.grade, want.grade);
    }
}

#[test]
fn test_row_count_matches_successful_adds() {
    let mut ledger = Ledger::new();
    let inputs = [
        ("Asha", "85,90,95"),
        ("", "80,90"),
        ("Sam", "80,x,90"),
        ("Ravi", "40,55,60"),
        ("Lee", "77.5"),
        ("Kim", "50"),
    ];

    let accepted: Vec<_> = inputs
        .iter()
        .filter_map(|(name, marks)| ledger.submit(name, marks).ok())
        .map(|summary| summary.name)
        .collect();

    let table = ledger.to_table();
    let names: Vec<_> = table.rows().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, accepted);
    assert_eq!(names, vec!["Asha", "Ravi", "Kim"]);
}

#[test]
fn test_export_overwrites_previous_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.csv");

    let mut ledger = Ledger::new();
    ledger.add("Asha", vec![85, 90, 95]).unwrap();
    ledger.add("Ravi", vec![40, 55, 60]).unwrap();
    ledger.export_csv(&path).unwrap();

    let mut smaller = Ledger::new();
    smaller.add("Kim", vec![50]).unwrap();
    smaller.export_csv(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Name,Marks,Average,Grade\nKim,50,50.0,C\n");
}

#[test]
fn test_empty_export_leaves_existing_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.csv");
    fs::write(&path, "keep me\n").unwrap();

    let err = Ledger::new().export_csv(&path).unwrap_err();

    assert!(matches!(err, LedgerError::EmptyLedger));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
}
