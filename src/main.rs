//! Renju board
//!
//! Opens the graphical board by default; `replay` plays a record headless and
//! prints the result.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use renju::ui::RenjuApp;
use renju::record::read_record;
use renju::{EndPolicy, EngineConfig, Game, RuleSet};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "renju", version, about = "Renju five-in-a-row board")]
struct Args {
    /// What to do with moves played after the game has ended
    #[arg(long, value_enum, default_value_t = EndPolicy::Strict)]
    end_policy: EndPolicy,

    /// Forbidden-move rule version
    #[arg(long, value_enum, default_value_t = RuleSet::V2)]
    rule_set: RuleSet,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Record to load into the board at start-up
    #[arg(long)]
    record: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON record without opening a window
    Replay {
        /// Record file: a JSON array of {"x": .., "y": ..}
        file: PathBuf,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_record(path: &PathBuf) -> Result<String> {
    read_record(path).with_context(|| format!("reading record {}", path.display()))
}

fn replay(config: EngineConfig, path: &PathBuf) -> Result<()> {
    let text = load_record(path)?;
    let mut game = Game::new(config);
    let snap = game.restore_from_history(&text)?;

    print!("{}", snap.board);
    println!("moves played: {}", snap.history.len());
    println!("{}", snap.status_message());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = EngineConfig::new(args.end_policy, args.rule_set);

    if let Some(Command::Replay { file }) = &args.command {
        return replay(config, file);
    }

    let record = args.record.as_ref().map(load_record).transpose()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(move |cc| {
            let app = match record {
                Some(text) => RenjuApp::with_record(cc, config, text),
                None => RenjuApp::new(cc, config),
            };
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}
