use std::fs;

use domus_core::{CoreError, ExpenseStore};
use domus_domain::ExpenseRecord;
use domus_store_json::JsonExpenseStore;
use tempfile::tempdir;

#[test]
fn store_saves_and_loads_building_records() {
    let dir = tempdir().expect("tempdir");
    let store = JsonExpenseStore::new(dir.path().join("buildings")).expect("create store");

    let records = vec![
        ExpenseRecord::new(2024, 1, 120.0, "cleaning"),
        ExpenseRecord::new(2024, 1, 2500.0, "repair"),
        ExpenseRecord::new(2024, 2, 80.5, "electricity"),
    ];
    store
        .save_building("Riga 12", &records)
        .expect("save building");

    let loaded = store
        .expenses_for_building("Riga 12")
        .expect("load building");
    assert_eq!(loaded, records);

    // Identifiers are sanitized into stable file stems.
    let path = store.building_path("Riga 12");
    assert!(path.ends_with("riga_12.json"));
    assert!(path.exists());
}

#[test]
fn unknown_building_yields_empty_record_set() {
    let dir = tempdir().expect("tempdir");
    let store = JsonExpenseStore::new(dir.path()).expect("create store");

    let records = store
        .expenses_for_building("nowhere")
        .expect("query unknown building");
    assert!(records.is_empty());
}

#[test]
fn malformed_ledger_file_is_a_store_error() {
    let dir = tempdir().expect("tempdir");
    let store = JsonExpenseStore::new(dir.path()).expect("create store");
    fs::write(store.building_path("broken"), "{not json").expect("write garbage");

    let err = store.expenses_for_building("broken").unwrap_err();
    assert!(matches!(err, CoreError::Store(_)));
}

#[test]
fn list_buildings_returns_sorted_stems() {
    let dir = tempdir().expect("tempdir");
    let store = JsonExpenseStore::new(dir.path()).expect("create store");

    store.save_building("Beta House", &[]).expect("save");
    store.save_building("Alpha Block", &[]).expect("save");

    let names = store.list_buildings().expect("list");
    assert_eq!(names, vec!["alpha_block", "beta_house"]);
}
