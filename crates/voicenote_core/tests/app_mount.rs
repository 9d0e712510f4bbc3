mod common;

use common::{FakeSpeech, CountingStore};
use voicenote_core::{
    mount, KeyValueNoteRepository, ManualClock, NotesApp, SubmitOutcome, Surface,
    UNSUPPORTED_NOTICE,
};

type App = NotesApp<FakeSpeech, KeyValueNoteRepository<CountingStore>, ManualClock>;

fn mount_app(store: CountingStore, clock: ManualClock) -> App {
    mount(FakeSpeech::supported(), KeyValueNoteRepository::new(store), clock)
        .unwrap()
        .into_app()
        .expect("supported capability should mount interactively")
}

#[test]
fn unsupported_capability_yields_static_notice_without_touching_store() {
    let store = CountingStore::seeded("notes", "corrupt");
    let surface = mount(
        FakeSpeech::unsupported(),
        KeyValueNoteRepository::new(store.clone()),
        ManualClock::starting_at(0),
    )
    .unwrap();

    match surface {
        Surface::Unsupported(message) => assert_eq!(message, UNSUPPORTED_NOTICE),
        Surface::Interactive(_) => panic!("unsupported host must not mount the app"),
    }
    assert_eq!(store.writes(), 0);
}

#[test]
fn mount_hydrates_persisted_notes() {
    let store = CountingStore::seeded("notes", r#"[{"id":"1","content":"persisted"}]"#);
    let app = mount_app(store, ManualClock::starting_at(0));
    assert_eq!(app.notes().notes()[0].content, "persisted");
    assert!(!app.is_recording());
}

#[test]
fn dictate_stop_and_save_flow() {
    let store = CountingStore::new();
    let clock = ManualClock::starting_at(1_700_000_000_000);
    let mut app = mount_app(store.clone(), clock.clone());

    assert_eq!(app.toggle_recording().unwrap(), None);
    assert!(app.is_recording());
    app.receive_transcript("buy");
    app.receive_transcript("buy milk");
    assert_eq!(app.compose().content(), "buy milk");

    let notice = app.toggle_recording().unwrap();
    assert!(notice.is_some());
    assert!(!app.is_recording());
    assert!(app.notice_visible());
    assert_eq!(app.compose().content(), "buy milk");

    clock.advance(5_000);
    assert!(!app.notice_visible());

    let SubmitOutcome::Accepted(note) = app.submit_compose().unwrap() else {
        panic!("dictated note should be accepted");
    };
    assert_eq!(note.content, "buy milk");
    assert_eq!(app.bridge().transcript(), "");
    assert_eq!(store.writes(), 1);
}

#[test]
fn editors_follow_display_order_and_drive_updates() {
    let clock = ManualClock::starting_at(100);
    let mut app = mount_app(CountingStore::new(), clock.clone());
    for content in ["oldest", "middle", "newest"] {
        app.compose_mut().set_content(content);
        assert!(app.submit_compose().unwrap().is_accepted());
        clock.advance(1);
    }

    let editors = app.editors();
    let shown: Vec<&str> = editors.iter().map(|e| e.content()).collect();
    assert_eq!(shown, vec!["newest", "middle", "oldest"]);

    let mut editor = editors[1].clone();
    editor.set_content("middle, revised");
    assert!(app.submit_editor(&mut editor).unwrap().is_accepted());
    app.delete_note(editors[0].clone()).unwrap();

    let shown: Vec<String> = app
        .editors()
        .iter()
        .map(|e| e.content().to_string())
        .collect();
    assert_eq!(shown, vec!["middle, revised", "oldest"]);
}

#[test]
fn submitting_while_recording_restarts_engine_transcript() {
    let speech = FakeSpeech::supported();
    let clock = ManualClock::starting_at(1_000);
    let mut app = mount(
        speech.clone(),
        KeyValueNoteRepository::new(CountingStore::new()),
        clock,
    )
    .unwrap()
    .into_app()
    .expect("supported capability should mount interactively");

    app.start_recording().unwrap();
    app.receive_transcript(speech.hear("buy milk"));
    let SubmitOutcome::Accepted(saved) = app.submit_compose().unwrap() else {
        panic!("dictated note should be accepted");
    };
    assert_eq!(saved.content, "buy milk");
    assert!(app.is_recording());
    assert_eq!(app.compose().content(), "");

    app.receive_transcript(speech.hear("and eggs"));

    assert_eq!(app.compose().content(), "and eggs");
    assert_eq!(
        speech.calls(),
        vec!["start continuous=true", "reset"]
    );
}
