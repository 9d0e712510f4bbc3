mod common;

use common::CountingStore;
use voicenote_core::{
    KeyValueNoteRepository, ManualClock, MemoryKeyValueStore, Note, NoteRepository, NoteService,
    NoteServiceError,
};

fn service_at(
    store: CountingStore,
    now_ms: i64,
) -> (NoteService<KeyValueNoteRepository<CountingStore>, ManualClock>, ManualClock) {
    let clock = ManualClock::starting_at(now_ms);
    let service = NoteService::load(KeyValueNoteRepository::new(store), clock.clone()).unwrap();
    (service, clock)
}

fn reload(store: &CountingStore) -> Vec<Note> {
    KeyValueNoteRepository::new(store.clone()).load().unwrap()
}

#[test]
fn add_then_reload_yields_single_note() {
    let store = CountingStore::new();
    let (mut service, _clock) = service_at(store.clone(), 1_700_000_000_000);

    let created = service.add("hello").unwrap();
    assert_eq!(created.id, "1700000000000");

    let reloaded = reload(&store);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].content, "hello");
    assert_eq!(reloaded[0], created);
}

#[test]
fn two_adds_get_distinct_ids_and_display_newest_first() {
    let (mut service, clock) = service_at(CountingStore::new(), 1_000);

    let first = service.add("x").unwrap();
    clock.advance(15);
    let second = service.add("x").unwrap();

    assert_ne!(first.id, second.id);
    let shown: Vec<&str> = service
        .display_order()
        .into_iter()
        .map(|note| note.id.as_str())
        .collect();
    assert_eq!(shown, vec![second.id.as_str(), first.id.as_str()]);
    let inserted: Vec<&str> = service.notes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(inserted, vec![first.id.as_str(), second.id.as_str()]);
}

#[test]
fn every_mutation_commits_exactly_once() {
    let store = CountingStore::new();
    let (mut service, clock) = service_at(store.clone(), 5_000);
    assert_eq!(store.writes(), 0);

    let note = service.add("a").unwrap();
    assert_eq!(store.writes(), 1);
    service.update(&note.id, "b").unwrap();
    assert_eq!(store.writes(), 2);
    service.update("missing", "c").unwrap();
    assert_eq!(store.writes(), 3);
    service.delete("missing").unwrap();
    assert_eq!(store.writes(), 4);
    clock.advance(1);
    service.delete(&note.id).unwrap();
    assert_eq!(store.writes(), 5);
}

#[test]
fn update_and_delete_on_unknown_id_leave_collection_unchanged() {
    let store = CountingStore::new();
    let (mut service, _clock) = service_at(store.clone(), 42);
    service.add("keep me").unwrap();
    let before = service.notes().to_vec();

    service.update("nope", "changed").unwrap();
    service.delete("nope").unwrap();

    assert_eq!(service.notes(), before.as_slice());
    assert_eq!(reload(&store), before);
}

#[test]
fn update_replaces_content_of_matching_note_only() {
    let store = CountingStore::new();
    let (mut service, clock) = service_at(store.clone(), 100);
    let a = service.add("a").unwrap();
    clock.advance(1);
    let b = service.add("b").unwrap();

    service.update(&a.id, "new").unwrap();

    assert_eq!(service.get(&a.id).unwrap().content, "new");
    assert_eq!(service.get(&b.id).unwrap().content, "b");
    assert_eq!(reload(&store), service.notes());
}

#[test]
fn delete_removes_exactly_that_note_and_persists() {
    let store = CountingStore::new();
    let (mut service, clock) = service_at(store.clone(), 100);
    let a = service.add("a").unwrap();
    clock.advance(1);
    let b = service.add("b").unwrap();
    clock.advance(1);
    let c = service.add("c").unwrap();

    service.delete(&b.id).unwrap();

    assert_eq!(service.notes(), &[a.clone(), c.clone()]);
    assert_eq!(reload(&store), vec![a, c]);
}

#[test]
fn round_trip_matches_after_mixed_operations() {
    let store = CountingStore::new();
    let (mut service, clock) = service_at(store.clone(), 10_000);
    let mut ids = Vec::new();
    for idx in 0..6 {
        clock.advance(7);
        ids.push(service.add(format!("note {idx}")).unwrap().id);
    }
    service.update(&ids[1], "edited").unwrap();
    service.delete(&ids[4]).unwrap();
    service.update(&ids[5], "").unwrap();

    let (rehydrated, _clock) = service_at(store.clone(), 0);
    assert_eq!(rehydrated.notes(), service.notes());
    assert_eq!(rehydrated.len(), 5);
}

#[test]
fn deleting_last_note_persists_empty_array_which_reloads_empty() {
    let store = CountingStore::new();
    let (mut service, _clock) = service_at(store.clone(), 1);
    let note = service.add("only").unwrap();

    service.delete(&note.id).unwrap();

    assert_eq!(store.raw("notes").as_deref(), Some("[]"));
    assert!(reload(&store).is_empty());
}

#[test]
fn hydrates_from_existing_store() {
    let store = CountingStore::seeded(
        "notes",
        r#"[{"id":"5","content":"five"},{"id":"50","content":"fifty"}]"#,
    );
    let (service, _clock) = service_at(store, 0);
    assert_eq!(service.len(), 2);
    assert_eq!(service.display_order()[0].content, "fifty");
}

#[test]
fn failed_commit_propagates_and_keeps_previous_state() {
    let store = CountingStore::new();
    let (mut service, clock) = service_at(store.clone(), 1);
    let kept = service.add("kept").unwrap();

    store.reject_writes(true);
    clock.advance(1);
    let err = service.add("lost").unwrap_err();
    assert!(matches!(err, NoteServiceError::Repo(_)));
    assert!(service.delete(&kept.id).is_err());

    assert_eq!(service.notes(), &[kept.clone()]);
    assert_eq!(reload(&store), vec![kept]);
}

#[test]
fn memory_store_can_back_the_service_directly() {
    let clock = ManualClock::starting_at(3);
    let mut service =
        NoteService::load(KeyValueNoteRepository::new(MemoryKeyValueStore::new()), clock).unwrap();
    service.add("in memory").unwrap();
    assert_eq!(service.repository().load().unwrap().len(), 1);
    assert!(!service.is_empty());
}
