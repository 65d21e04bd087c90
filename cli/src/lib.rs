pub mod logging;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slidedeck_common::{valid_swipe_threshold, PresenterConfig};
use slidedeck_core::{Command, LiveRegion, RenderTarget, SlideController, SlideSet, ViewState};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slidedeck")]
#[command(about = "Present markdown slide decks in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (to slidedeck.log unless a log path is configured)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Read configuration from this JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long, global = true, value_parser = parse_threshold)]
    pub swipe_threshold: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Present a markdown deck interactively
    Present {
        /// Path to markdown file
        file: PathBuf,
        /// Open at this slide (1-based)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Apply navigation steps headlessly and print the resulting view state
    Inspect {
        /// Path to markdown file
        file: PathBuf,
        /// next | prev | first | last | goto:K (1-based); repeatable
        #[arg(long = "step", value_parser = parse_step)]
        steps: Vec<Command>,
    },
    /// List slide titles
    List {
        /// Path to markdown file
        file: PathBuf,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let _log_guard = match logging::resolve_log_path(config.log_path.as_deref(), cli.debug) {
        Some(path) => Some(logging::init_logging(&path, cli.debug)?),
        None => None,
    };

    match cli.command {
        Commands::Present { file, start } => {
            let start = start.map(|k| k.checked_sub(1).unwrap_or(usize::MAX));
            slidedeck_tui::run_presenter(&file, &config, start).await?;
        }
        Commands::Inspect { file, steps } => {
            let view = inspect(&load_deck(&file)?, &steps);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Commands::List { file } => {
            for (i, slide) in load_deck(&file)?.iter().enumerate() {
                println!("{}. {} [{}]", i + 1, slide.title, slide.id);
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<PresenterConfig> {
    let mut config = match &cli.config {
        Some(path) => PresenterConfig::load_from_file(path)?,
        None => {
            let cwd = std::env::current_dir().context("reading current directory")?;
            PresenterConfig::load_with_fallback(&cwd)
        }
    };
    config.apply_env();
    if let Some(px) = cli.swipe_threshold {
        config.swipe_threshold_px = px;
    }
    Ok(config)
}

fn load_deck(path: &Path) -> Result<SlideSet> {
    SlideSet::load(path).with_context(|| format!("loading slides from {}", path.display()))
}

/// Headless render target: only remembers the latest view.
#[derive(Default)]
struct Snapshot(Option<ViewState>);

impl RenderTarget for Snapshot {
    fn apply_view(&mut self, view: &ViewState) {
        self.0 = Some(view.clone());
    }
}

fn inspect(slides: &SlideSet, steps: &[Command]) -> ViewState {
    let mut controller =
        SlideController::new(slides.clone(), Snapshot::default(), LiveRegion::new());
    for step in steps {
        controller.apply(*step);
    }
    controller.view()
}

fn parse_threshold(raw: &str) -> Result<f64> {
    let px: f64 = raw
        .parse()
        .with_context(|| format!("bad swipe threshold `{raw}`"))?;
    if !valid_swipe_threshold(px) {
        bail!("swipe threshold must be a finite, non-negative number of pixels");
    }
    Ok(px)
}

fn parse_step(raw: &str) -> Result<Command> {
    Ok(match raw {
        "next" => Command::Advance,
        "prev" => Command::Retreat,
        "first" => Command::JumpTo(0),
        "last" => Command::JumpToLast,
        other => {
            let Some(k) = other.strip_prefix("goto:") else {
                bail!("unknown step `{other}` (expected next, prev, first, last or goto:K)");
            };
            let k: usize = k
                .parse()
                .with_context(|| format!("bad slide number in `{other}`"))?;
            // goto:0 maps past the end so the jump guard rejects it
            Command::JumpTo(k.checked_sub(1).unwrap_or(usize::MAX))
        }
    })
}
