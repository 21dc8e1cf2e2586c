use anyhow::Context;
use clap::{ArgAction, Parser};
use scribble::Config;
use scribble::export::DirectorySink;
use scribble::sketch::{LogPresenter, SketchController, SketchDependencies, SketchOptions};
use scribble::surface::CairoSurface;
use std::path::PathBuf;
use std::time::Duration;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SCRIBBLE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "scribble")]
#[command(
    version = VERSION,
    about = "Freehand sketch recorder with JSON export and PNG rasterization"
)]
struct Cli {
    /// Drawing file (JSON) to import and replay
    #[arg(long, short = 'i', value_name = "FILE")]
    import: Option<PathBuf>,

    /// Save the replayed drawing as a 512x512 PNG
    #[arg(long, action = ArgAction::SetTrue)]
    image: bool,

    /// Re-export the replayed drawing as <nickname>_<NNNNNN>.json
    #[arg(long, short = 'e', action = ArgAction::SetTrue)]
    export: bool,

    /// Nickname used to name exported drawings
    #[arg(long, short = 'n')]
    nickname: Option<String>,

    /// Directory output files are written to
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.config/scribble/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Replay without pausing between segments
    #[arg(long, action = ArgAction::SetTrue)]
    no_delay: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(import) = cli.import.as_deref() else {
        println!("scribble: Freehand sketch recorder with JSON export and PNG rasterization");
        println!();
        println!("Usage:");
        println!("  scribble --import drawing.json --image     Replay a drawing and save scribble.png");
        println!("  scribble --import drawing.json --export    Replay and re-export as <nickname>_<NNNNNN>.json");
        println!("  scribble --help                            Show help");
        println!();
        println!("Configuration:");
        println!("  ~/.config/scribble/config.toml ([canvas], [export], [replay], [keybindings])");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut options = SketchOptions::from_config(&config)?;
    if let Some(nickname) = &cli.nickname {
        options.nickname = nickname.clone();
    }
    if cli.no_delay {
        options.segment_delay = Duration::ZERO;
    }

    let sink = DirectorySink::new(
        cli.output_dir
            .clone()
            .unwrap_or_else(|| config.export_directory()),
    );
    log::debug!("Writing output files to {}", sink.directory().display());

    let surface = CairoSurface::new(config.canvas.width, config.canvas.height)?;
    let deps = SketchDependencies {
        sink: Box::new(sink),
        presenter: Box::new(LogPresenter),
    };
    let mut controller = SketchController::new(surface, options, deps);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let strokes = runtime
        .block_on(controller.import_file(import))
        .with_context(|| format!("Failed to import {}", import.display()))?;
    println!("Imported {} strokes from {}", strokes, import.display());

    if cli.export {
        let path = controller.export()?;
        println!("Exported drawing to {}", path.display());
    }

    if cli.image {
        let path = controller.rasterize_to_image()?;
        println!("Saved image to {}", path.display());
    }

    Ok(())
}
