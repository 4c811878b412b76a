pub mod renderer;

use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use thiserror::Error;

use crate::{
    config::{MazeConfig, Solution, solve},
    error::MazeError,
};
use renderer::{RenderStatus, Renderer, print_maze};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs `attempt` until it stops failing with [`MazeError::NoPathFound`], at
/// most `max_attempts` times (at least once).
///
/// Attempt `i` gets `seed + i`, so a fixed seed still gives a reproducible
/// sequence of retries. Any other error is returned immediately.
pub fn retry_unsolvable<T>(
    max_attempts: usize,
    seed: Option<u64>,
    mut attempt: impl FnMut(Option<u64>) -> Result<T, MazeError>,
) -> Result<T, MazeError> {
    let max_attempts = max_attempts.max(1);
    let mut tries = 0;
    loop {
        let attempt_seed = seed.map(|s| s.wrapping_add(tries as u64));
        tries += 1;
        match attempt(attempt_seed) {
            Err(err @ MazeError::NoPathFound { .. }) if tries < max_attempts => {
                tracing::warn!(attempt = tries, %err, "regenerating unsolvable maze");
            }
            result => return result,
        }
    }
}

pub struct App {
    /// Generation attempts made before giving up on an unsolvable maze
    max_attempts: usize,
    /// Time between two painted path cells
    frame_interval: Duration,
    /// Animate the path in the terminal
    animate: bool,
    /// Print the plain maze to stdout
    print: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            frame_interval: Duration::from_millis(30),
            animate: true,
            print: false,
        }
    }
}

impl App {
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_printing(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Generates and solves a maze, regenerating unsolvable ones.
    pub fn solve(&self, config: &MazeConfig) -> Result<Solution, MazeError> {
        retry_unsolvable(self.max_attempts, config.seed(), |seed| {
            solve(&config.with_seed(seed))
        })
    }

    /// Set a panic hook to restore terminal state on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn wait_for_key() -> std::io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    fn animate(&self, stdout: &mut Stdout, solution: &Solution) -> std::io::Result<RenderStatus> {
        let mut renderer = Renderer::new(&mut *stdout, self.frame_interval);
        let status = renderer.animate(&solution.maze, &solution.path)?;

        let (msg, color) = match status {
            RenderStatus::Completed => (
                format!("Path found in {} steps! ", solution.path.steps()),
                Color::Green,
            ),
            RenderStatus::Cancelled => ("Animation cancelled. ".to_string(), Color::Yellow),
            RenderStatus::TerminalTooSmall { needed, available } => (
                format!(
                    "Terminal size is too small ({}x{}) for the maze ({}x{}). ",
                    available.0, available.1, needed.0, needed.1
                ),
                Color::Yellow,
            ),
        };
        if status != RenderStatus::Cancelled {
            queue!(
                stdout,
                style::PrintStyledContent(msg.with(color).attribute(Attribute::Bold)),
                style::PrintStyledContent(
                    "Press any key to exit...\r\n"
                        .with(Color::Blue)
                        .attribute(Attribute::Bold)
                )
            )?;
            stdout.flush()?;
            App::wait_for_key()?;
        }
        Ok(status)
    }

    /// Generate, solve, then print and/or animate.
    pub fn run(&self, config: &MazeConfig) -> Result<(), AppError> {
        let solution = self.solve(config)?;
        let mut stdout = std::io::stdout();

        if self.print {
            print_maze(&mut stdout, &solution.maze)?;
        }

        if self.animate {
            App::setup_terminal(&mut stdout)?;
            let status = self.animate(&mut stdout, &solution);
            App::restore_terminal(&mut stdout)?;
            tracing::info!(?status, "[app] animation finished");
            status?;
        } else {
            writeln!(stdout, "Path found in {} steps.", solution.path.steps())?;
        }
        Ok(())
    }
}
