use std::time::{Duration, Instant};

use mazepath::{MazeConfig, app::App};

/// Headless generate-and-solve loop: `profile [iterations] [size]`.
fn main() -> Result<(), mazepath::MazeError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(10);
    let size = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1000);

    let app = App::default().with_animation(false);
    let mut total = Duration::ZERO;
    let mut total_steps = 0;
    for seed in 0..num_iters {
        let config = MazeConfig::new(size, size)?.with_seed(Some(seed));
        let started = Instant::now();
        let solution = app.solve(&config)?;
        let elapsed = started.elapsed();
        total += elapsed;
        total_steps += solution.path.steps();
        tracing::info!(seed, ?elapsed, steps = solution.path.steps(), "[profile] iteration done");
    }

    if num_iters > 0 {
        println!(
            "{num_iters} mazes of {size}x{size}: average {:?}, average path {} steps",
            total / num_iters as u32,
            total_steps / num_iters as usize
        );
    }
    Ok(())
}
