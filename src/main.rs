use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use mazepath::{MazeConfig, app::App};

/// Generate a braided maze and animate its shortest path in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Maze height in cells
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Maze width in cells
    #[arg(long, default_value_t = 21)]
    cols: usize,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the extra random openings and keep the carved spanning tree
    #[arg(long)]
    no_braid: bool,

    /// Print the maze as plain text before animating
    #[arg(short, long)]
    print: bool,

    /// Do not animate the path
    #[arg(long)]
    no_animate: bool,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = 30)]
    interval_ms: u64,

    /// Generation attempts before giving up on an unsolvable maze
    #[arg(long, default_value_t = 3)]
    max_attempts: usize,

    /// Write logs to mazepath.log in this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

/// Install the global subscriber. The returned guard must be held until exit
/// so buffered file logs are flushed.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, "mazepath.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_writer(writer)
                .with_ansi(false)
                .with_max_level(Level::DEBUG)
                .init();
            Some(guard)
        }
        None => {
            // Stderr shares the terminal with the animation, keep it quiet by default
            let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(level)
                .init();
            None
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(&cli);

    let config = match MazeConfig::new(cli.rows, cli.cols) {
        Ok(config) => config.with_seed(cli.seed).with_braid(!cli.no_braid),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let app = App::default()
        .with_max_attempts(cli.max_attempts)
        .with_frame_interval(Duration::from_millis(cli.interval_ms))
        .with_animation(!cli.no_animate)
        .with_printing(cli.print);

    match app.run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
