//! flipbook - play a directory of text frames as a looping terminal
//! animation, redrawing only the characters that change.

use clap::Parser;
use flipbook_core::FrameSequence;
use flipbook_terminal::{CrosstermSurface, Player, DEFAULT_DELAY_MS};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod signal;

#[derive(Debug, Parser)]
#[command(name = "flipbook")]
#[command(about = "Terminal text animation player")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Directory containing animation frames (one text file per frame,
    /// played in file-name order)
    #[arg(default_value = "anim")]
    dir: PathBuf,

    /// Delay between frames in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
    delay: u64,

    /// Print version information
    #[arg(short = 'v', long = "version")]
    version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("flipbook {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let stop = Arc::new(AtomicBool::new(false));
    if let Err(err) = signal::install(Arc::clone(&stop)) {
        eprintln!("flipbook: cannot install signal handlers: {err}");
        return ExitCode::FAILURE;
    }

    let sequence = match FrameSequence::load_dir(&cli.dir) {
        Ok(sequence) => sequence,
        Err(err) => {
            eprintln!("flipbook: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut player = Player::new(sequence, Duration::from_millis(cli.delay), stop);
    let mut surface = CrosstermSurface::new();
    match player.run(&mut surface) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("flipbook: {err}");
            ExitCode::FAILURE
        }
    }
}
