use std::io::Write;

use anyhow::{bail, Context, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};
use log::info;

use acarnam::character::{available_classes, validate_name, CharacterManager, CharacterRecord};
use acarnam::config::GameConfig;
use acarnam::session::{ExplorationSession, SessionEnd, TerminalPresenter};

#[derive(Parser)]
#[command(name = "acarnam")]
#[command(about = "A text adventure on a 5x5 grid of zones")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "acarnam.toml", global = true)]
    config: String,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character
    New {
        name: String,
        /// Warrior, Mage or Rogue
        #[arg(short, long, default_value = "Warrior")]
        class: String,
    },
    /// Play an existing character
    Play { name: String },
    /// List saved characters, most recent first
    List,
    /// Delete a saved character
    Delete { name: String },
    /// Show the playable classes
    Classes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config))?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Classes => {
            for class in available_classes() {
                let spells: Vec<String> = class
                    .spells
                    .iter()
                    .map(|s| format!("{} ({} dmg, {} mana)", s.name, s.damage, s.mana_cost))
                    .collect();
                println!(
                    "{:<8} HP {:>3}  Mana {:>3}  Spells: {}",
                    class.name,
                    class.hp_max,
                    class.mana_max,
                    spells.join(", ")
                );
            }
        }
        Commands::New { name, class } => {
            if let Err(reason) = validate_name(&name) {
                bail!("{}", reason);
            }
            let manager = CharacterManager::new(&config)?;
            if manager.exists(&name) {
                bail!("a character named {} already exists", name);
            }
            let Some(mut record) = CharacterRecord::new(name.trim(), &class) else {
                bail!("unknown class {} (try `acarnam classes`)", class);
            };
            record.last_save_time = Utc::now().timestamp();
            let path = manager.save_character(&record)?;
            println!(
                "Created {} the {} ({}). Start with `acarnam play \"{}\"`.",
                record.name,
                record.class,
                path.display(),
                record.name
            );
        }
        Commands::Play { name } => {
            let mut manager = CharacterManager::new(&config)?;
            let record = manager
                .load_character(&name)
                .with_context(|| format!("could not load {}", name))?;
            let mut presenter = TerminalPresenter::stdio();
            let summary =
                ExplorationSession::new(&mut presenter, &mut manager, record, config.autosave_every)
                    .run();
            info!("session ended: {:?}", summary.end);
            let farewell = match summary.end {
                SessionEnd::Quit => "Farewell, adventurer.",
                SessionEnd::Died => "Rest well. Astrab will be waiting.",
                SessionEnd::ActionLimit => "Session over.",
            };
            println!(
                "{} {} is level {} with {} gold.",
                farewell, summary.record.name, summary.record.level, summary.record.gold
            );
        }
        Commands::List => {
            let manager = CharacterManager::new(&config)?;
            let characters = manager.list_characters()?;
            if characters.is_empty() {
                println!("No characters yet. Create one with `acarnam new NAME`.");
            }
            for info in characters {
                if info.is_corrupted {
                    println!("{:<16} (unreadable: {})", info.name, info.filename);
                    continue;
                }
                let saved = Utc
                    .timestamp_opt(info.last_save_time, 0)
                    .single()
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "never".to_string());
                println!(
                    "{:<16} {:<8} level {:>2}  {:>5} gold  saved {}",
                    info.name, info.class, info.level, info.gold, saved
                );
            }
        }
        Commands::Delete { name } => {
            let manager = CharacterManager::new(&config)?;
            manager.delete_character(&name)?;
            println!("Deleted {}.", name);
        }
    }

    Ok(())
}

fn init_logging(config: &GameConfig, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => config.log_level(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.format(|fmt, record| {
        let ts = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    // RUST_LOG still wins when set.
    builder.parse_default_env();
    builder.init();
}
