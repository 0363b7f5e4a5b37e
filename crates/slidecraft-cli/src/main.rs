//! SlideCraft command line driver (native).

mod script;
mod shortcuts;

use clap::{Parser, Subcommand};
use slidecraft_core::{
    ConfigError, EditorConfig, EditorSession, FileStorage, Presentation, Storage, StorageError,
};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::shortcuts::ShortcutRegistry;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("presentation `{0}` already exists")]
    AlreadyExists(String),
}

#[derive(Parser, Debug)]
#[command(name = "slidecraft")]
#[command(version, about = "Headless SlideCraft editor", long_about = None)]
struct Cli {
    /// Directory holding the decks (defaults to the platform data directory)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Editor config JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty deck
    New {
        id: String,
        #[arg(long)]
        title: Option<String>,
    },
    /// List stored decks
    List,
    /// Print a short summary of a deck
    Show { id: String },
    /// Replay a script of pointer and key events on a deck and save it
    Run {
        id: String,
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
        /// Replay without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Delete a deck
    Delete { id: String },
    /// Print the keyboard shortcuts
    Shortcuts,
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting SlideCraft");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn open_storage(dir: Option<PathBuf>) -> Result<FileStorage, StorageError> {
    match dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::default_location(),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    if let Command::Shortcuts = cli.command {
        ShortcutRegistry::new().print_all();
        return Ok(());
    }
    let storage = open_storage(cli.dir)?;
    log::info!("Using deck directory {}", storage.base_path().display());
    run_deck_command(cli.command, &storage, config)
}

fn run_deck_command(
    command: Command,
    storage: &FileStorage,
    config: EditorConfig,
) -> Result<(), CliError> {
    match command {
        Command::New { id, title } => {
            if pollster::block_on(storage.exists(&id))? {
                return Err(CliError::AlreadyExists(id));
            }
            let mut deck = Presentation::new();
            if let Some(title) = title {
                deck.title = title;
            }
            pollster::block_on(storage.save(&id, &deck))?;
            log::info!("Created {id}");
        }
        Command::List => {
            for id in pollster::block_on(storage.list())? {
                println!("{id}");
            }
        }
        Command::Show { id } => {
            let deck = pollster::block_on(storage.load(&id))?;
            print_summary(&id, &deck);
        }
        Command::Run {
            id,
            script,
            dry_run,
        } => {
            let deck = pollster::block_on(storage.load(&id))?;
            log::info!("Loaded {id} ({} slides)", deck.slide_count());

            let json = std::fs::read_to_string(&script).map_err(|source| CliError::ReadScript {
                path: script.clone(),
                source,
            })?;
            let steps = script::parse(&json)?;

            let mut session = EditorSession::with_presentation(deck, config);
            let report = script::replay(&mut session, &steps, &ShortcutRegistry::new());
            log::info!(
                "Replayed {} steps ({} applied, {} ignored)",
                steps.len(),
                report.applied,
                report.ignored
            );

            if dry_run {
                print_summary(&id, session.presentation());
            } else {
                pollster::block_on(storage.save(&id, session.presentation()))?;
                log::info!("Saved {id}");
            }
        }
        Command::Delete { id } => {
            pollster::block_on(storage.delete(&id))?;
            log::info!("Deleted {id}");
        }
        Command::Shortcuts => ShortcutRegistry::new().print_all(),
    }
    Ok(())
}

fn print_summary(id: &str, deck: &Presentation) {
    println!("{id}: {}", deck.title);
    for (i, slide) in deck.slides().iter().enumerate() {
        println!("  [{i}] {} ({} objects)", slide.name, slide.len());
        for object in slide.objects_in_paint_order() {
            let t = object.transform;
            println!(
                "      {:<16} x={:.0} y={:.0} w={:.0} h={:.0}{}",
                object.name,
                t.x,
                t.y,
                t.width,
                t.height,
                if object.locked { " (locked)" } else { "" }
            );
        }
    }
}
