//! `voicenote` command-line front end.
//!
//! # Responsibility
//! - Drive the core note surface against the SQLite key-value store.
//! - Stand in for a speech engine by reading transcript text from stdin.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::cell::RefCell;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use voicenote_core::db::open_db;
use voicenote_core::{
    init_logging, mount, CoreConfig, DictationError, KeyValueNoteRepository, ListenOptions,
    NotesApp, SpeechCapability, SqliteKeyValueStore, SubmitOutcome, SystemClock,
};

#[derive(Parser)]
#[command(name = "voicenote")]
#[command(about = "Type or dictate notes into a local store")]
struct Cli {
    /// SQLite file backing the note store (overrides VOICENOTE_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Health check
    Ping,
    /// List notes, newest first
    List,
    /// Add a note
    Add {
        /// Note content (at most 3000 characters)
        content: String,
    },
    /// Replace the content of a note (fails if no note has this id)
    Update {
        /// Note id
        id: String,
        /// New content
        content: String,
    },
    /// Delete a note (fails if no note has this id)
    Delete {
        /// Note id
        id: String,
    },
    /// Read stdin lines as a live transcript until EOF
    Dictate {
        /// Save the transcript as a note when recording stops
        #[arg(long)]
        save: bool,
    },
}

/// Speech engine stand-in: the transcript arrives on stdin.
///
/// Each line extends the cumulative transcript until the engine is reset.
#[derive(Default)]
struct StdinSpeech {
    heard: Rc<RefCell<String>>,
}

impl StdinSpeech {
    fn hear(&self, line: &str) -> String {
        let mut heard = self.heard.borrow_mut();
        if !heard.is_empty() {
            heard.push(' ');
        }
        heard.push_str(line.trim());
        heard.clone()
    }
}

impl SpeechCapability for StdinSpeech {
    fn is_supported(&self) -> bool {
        true
    }

    fn start_listening(&mut self, options: ListenOptions) -> Result<(), DictationError> {
        info!(
            "event=stdin_speech_start module=cli status=ok continuous={}",
            options.continuous
        );
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), DictationError> {
        info!("event=stdin_speech_stop module=cli status=ok");
        Ok(())
    }

    fn reset_transcript(&mut self) {
        self.heard.borrow_mut().clear();
    }
}

type CliApp<'conn> =
    NotesApp<StdinSpeech, KeyValueNoteRepository<SqliteKeyValueStore<'conn>>, SystemClock>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir).map_err(|err| anyhow!(err))?;
    }
    let db_path = cli.db.unwrap_or(config.db_path);

    match cli.command {
        Commands::Ping => {
            println!("voicenote_core ping={}", voicenote_core::ping());
            println!("voicenote_core version={}", voicenote_core::core_version());
            Ok(())
        }
        Commands::List => with_app(&db_path, |app| {
            list(app);
            Ok(())
        }),
        Commands::Add { content } => with_app(&db_path, |app| {
            app.compose_mut().set_content(content);
            submit_compose(app)
        }),
        Commands::Update { id, content } => with_app(&db_path, |app| {
            let mut editor = find_editor(app, &id)?;
            editor.set_content(content);
            match app.submit_editor(&mut editor)? {
                SubmitOutcome::Accepted(()) => println!("Updated {id}."),
                SubmitOutcome::Rejected(err) => bail!("{err}"),
            }
            Ok(())
        }),
        Commands::Delete { id } => with_app(&db_path, |app| {
            let editor = find_editor(app, &id)?;
            app.delete_note(editor)?;
            println!("Deleted {id}.");
            Ok(())
        }),
        Commands::Dictate { save } => with_app(&db_path, |app| {
            dictate(app)?;
            if save {
                submit_compose(app)?;
            }
            Ok(())
        }),
    }
}

/// Opens the note store at `db_path`, mounts the app and runs `f` on it.
fn with_app(db_path: &Path, f: impl FnOnce(&mut CliApp<'_>) -> Result<()>) -> Result<()> {
    let conn = open_db(db_path).with_context(|| format!("opening {}", db_path.display()))?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let mut app = mount(
        StdinSpeech::default(),
        KeyValueNoteRepository::new(store),
        SystemClock,
    )?
    .into_app()
    .ok_or_else(|| anyhow!(voicenote_core::UNSUPPORTED_NOTICE))?;
    f(&mut app)
}

fn list(app: &CliApp<'_>) {
    let notes = app.notes().display_order();
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    for note in notes {
        println!("{}\t{}", note.id, note.content);
    }
}

fn submit_compose(app: &mut CliApp<'_>) -> Result<()> {
    match app.submit_compose()? {
        SubmitOutcome::Accepted(note) => {
            println!("Saved note {}.", note.id);
            Ok(())
        }
        SubmitOutcome::Rejected(err) => bail!("{err}"),
    }
}

fn find_editor(app: &CliApp<'_>, id: &str) -> Result<voicenote_core::NoteEditor> {
    app.editors()
        .into_iter()
        .find(|editor| editor.id() == id)
        .ok_or_else(|| anyhow!("no note with id {id}"))
}

fn dictate(app: &mut CliApp<'_>) -> Result<()> {
    app.start_recording()?;
    eprintln!("Recording. Type text, end with Ctrl-D.");

    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading transcript from stdin")?;
        let transcript = app.bridge().capability().hear(&line);
        app.receive_transcript(transcript);
    }

    let notice = app.stop_recording()?;
    println!("{}", app.compose().content());
    eprintln!("{}", notice.message());
    Ok(())
}
