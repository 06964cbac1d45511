//! Balance wheel CLI.
//!
//! Maintains a persisted list of scored life areas (`<state-dir>/wheel.json`)
//! and renders them as a radial chart. Every editing subcommand maps to one
//! store operation and persists before exiting.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use wheel::core::geometry::layout;
use wheel::io::config::load_config;
use wheel::io::port::{FilePort, StatePort};
use wheel::io::store::{STATE_KEY, SegmentStore};
use wheel::{logging, svg};

#[derive(Parser)]
#[command(name = "wheel", version, about = "Balance wheel self-assessment chart")]
struct Cli {
    /// Directory holding wheel state and config.
    #[arg(long, default_value = ".wheel")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed the state file with the default seven areas.
    Init {
        /// Overwrite existing state.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the current areas with their scores.
    List,
    /// Rename the area at the given index.
    Rename { index: usize, name: String },
    /// Set the 1-10 score of the area at the given index.
    Score { index: usize, value: u8 },
    /// Append a new area (default name "New area", score 5, random color).
    Add { name: Option<String> },
    /// Remove the area at the given index.
    Remove { index: usize },
    /// Render the wheel as an SVG document.
    Render {
        /// Output file, `-` for stdout.
        #[arg(short, long, default_value = "wheel.svg")]
        output: String,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let port = FilePort::new(&cli.state_dir);

    match cli.command {
        Command::Init { force } => {
            if !force && port.get(STATE_KEY)?.is_some() {
                bail!(
                    "wheel state already exists in {} (use --force to overwrite)",
                    cli.state_dir.display()
                );
            }
            let mut store = SegmentStore::load(port)?;
            store.reset()
        }
        Command::List => {
            let store = SegmentStore::load(port)?;
            for (index, segment) in store.segments().iter().enumerate() {
                println!("{index:>2}  {:>2}  {}", segment.value, segment.name);
            }
            Ok(())
        }
        Command::Rename { index, name } => SegmentStore::load(port)?.rename(index, &name),
        Command::Score { index, value } => SegmentStore::load(port)?.rescore(index, value),
        Command::Add { name } => SegmentStore::load(port)?.add(name.as_deref()),
        Command::Remove { index } => SegmentStore::load(port)?.remove(index),
        Command::Render { output } => {
            let store = SegmentStore::load(port)?;
            let config = load_config(&cli.state_dir.join("config.toml"))?;
            let model = layout(store.segments(), &config.params());
            let doc = svg::document(&model, &config);
            if output == "-" {
                print!("{doc}");
            } else {
                fs::write(&output, doc).with_context(|| format!("write {output}"))?;
            }
            Ok(())
        }
    }
}
