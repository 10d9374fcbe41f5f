//! End-to-end checks of the entry and review flow against a file-backed slot.

use readings_client::{
    db::{seed_readings, FileSlot},
    ReadingStore, ReadingType,
};
use readings_service::{
    format::format_value,
    ids::SequentialIds,
    locale::Locale,
    query::{page, sorted_by_date, ReadingQuery, DEFAULT_PAGE_SIZE},
    ReadingCandidate, ReadingEntry,
};
use time::macros::datetime;

fn candidate(value: f64, kind: ReadingType) -> ReadingCandidate {
    ReadingCandidate {
        date_time: Some(datetime!(2025-12-06 14:30)),
        meter_id: Some("07".to_string()),
        address: Some("<p>Av. El Sol 45, Viña del Mar</p>".to_string()),
        value: Some(value),
        kind: Some(kind),
        note: Some("Turno tarde".to_string()),
    }
}

#[test]
fn entry_and_review_flow_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ReadingStore::new(FileSlot::new(dir.path(), "mediciones_sanquinta"));
    assert!(store.initialize().unwrap());

    let mut entry = ReadingEntry::new(SequentialIds::starting_at(1_000), Locale::Es);
    let added = entry
        .register(&mut store, &candidate(320.5, ReadingType::Watts))
        .unwrap();
    assert_eq!(added.date, "06-diciembre-2025");
    assert_eq!(added.time, "14:30");
    assert_eq!(format_value(&added), "320.5 W");

    store.delete_by_id(201).unwrap();

    // A second handle on the same slot stands in for a reload.
    let mut reopened = ReadingStore::new(FileSlot::new(dir.path(), "mediciones_sanquinta"));
    assert!(!reopened.initialize().unwrap());

    let all = reopened.get_all();
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|r| r.id != 201));
    assert_eq!(all.last(), Some(&added));

    let watts = ReadingQuery::new(&reopened).filter_by_type(Some(&ReadingType::Watts));
    let watt_ids: Vec<u64> = watts.iter().map(|r| r.id).collect();
    assert_eq!(watt_ids, vec![202, 205, 1_000]);
}

#[test]
fn other_handle_sees_writes_on_requery() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = ReadingStore::new(FileSlot::new(dir.path(), "mediciones"));
    let viewer = ReadingStore::new(FileSlot::new(dir.path(), "mediciones"));

    writer.initialize().unwrap();
    assert_eq!(viewer.get_all(), seed_readings());

    writer.delete_by_id(203).unwrap();
    assert_eq!(viewer.get_all().len(), 4);
}

#[test]
fn corrupt_slot_file_is_reseeded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("mediciones.json"), "{ not an array").unwrap();

    let mut store = ReadingStore::new(FileSlot::new(dir.path(), "mediciones"));
    assert!(store.get_all().is_empty());
    assert!(store.initialize().unwrap());
    assert_eq!(store.get_all(), seed_readings());
}

#[test]
fn review_table_first_page_is_newest_readings() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ReadingStore::new(FileSlot::new(dir.path(), "mediciones"));
    store.initialize().unwrap();

    let mut entry = ReadingEntry::new(SequentialIds::starting_at(1), Locale::Es);
    entry
        .register(&mut store, &candidate(15.0, ReadingType::Temperature))
        .unwrap();

    let sorted = sorted_by_date(ReadingQuery::new(&store).filter_by_type(None));
    let first: Vec<u64> = page(&sorted, 0, DEFAULT_PAGE_SIZE).iter().map(|r| r.id).collect();

    // The form-entered "06-diciembre-2025" is newer than every seeded ISO date.
    assert_eq!(first, vec![1, 205, 204, 203, 202]);
}
