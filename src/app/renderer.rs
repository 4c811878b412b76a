use std::{io::Write, time::Duration};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    style::{self, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    maze::{Cell, Coord, GridMaze},
    solvers::Path,
};

/// The width of each cell when rendered, in character widths.
pub const CELL_WIDTH: u16 = 2;

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Every path cell was painted.
    Completed,
    /// The user pressed Esc.
    Cancelled,
    /// The maze does not fit in the terminal; nothing was drawn.
    TerminalTooSmall { needed: (u16, u16), available: (u16, u16) },
}

/// Writes the plain text form of `maze`, one row per line.
pub fn print_maze<W: Write>(writer: &mut W, maze: &GridMaze) -> std::io::Result<()> {
    write!(writer, "{maze}")?;
    writer.flush()
}

fn styled_cell(cell: Cell) -> StyledContent<&'static str> {
    let styled_symbol = match cell {
        Cell::Wall => "⬜".with(Color::White),
        Cell::Passage => "  ".with(Color::Reset),
        Cell::Start => "🟩".with(Color::Green),
        Cell::End => "🟥".with(Color::Red),
    };
    debug_assert_glyph_width(&styled_symbol);
    styled_symbol
}

fn styled_route() -> StyledContent<&'static str> {
    let styled_symbol = "🟨".with(Color::Yellow);
    debug_assert_glyph_width(&styled_symbol);
    styled_symbol
}

fn debug_assert_glyph_width(_symbol: &StyledContent<&'static str>) {
    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            _symbol.content().width(),
            CELL_WIDTH as usize,
            "Each cell must occupy exactly two character widths."
        );
    }
}

/// Terminal columns and rows needed to draw `maze`, or `None` if that does not fit in `u16`.
pub fn required_size(maze: &GridMaze) -> Option<(u16, u16)> {
    let width = u16::try_from(maze.cols()).ok()?.checked_mul(CELL_WIDTH)?;
    let height = u16::try_from(maze.rows()).ok()?;
    Some((width, height))
}

fn screen_position((row, col): Coord) -> (u16, u16) {
    // Callers check the maze fits on screen, so both fit in u16
    (col as u16 * CELL_WIDTH, row as u16)
}

/// Draws a maze and then paints its path one cell per frame.
pub struct Renderer<W: Write> {
    out: W,
    /// Time between two painted path cells
    frame_interval: Duration,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, frame_interval: Duration) -> Self {
        Renderer {
            out,
            frame_interval,
        }
    }

    /// Queues every cell of `maze`, one terminal line per row.
    pub fn draw_maze(&mut self, maze: &GridMaze) -> std::io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::Hide)?;
        for (row, cells) in maze.cells().chunks(maze.cols()).enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for &cell in cells {
                queue!(self.out, style::PrintStyledContent(styled_cell(cell)))?;
            }
        }
        self.out.flush()
    }

    /// Waits one frame. Returns `true` if Esc was pressed in the meantime.
    fn wait_frame(&self) -> std::io::Result<bool> {
        if !event::poll(self.frame_interval)? {
            return Ok(false);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(key.code == KeyCode::Esc),
            _ => Ok(false),
        }
    }

    /// Draws `maze` and animates `path` over it.
    ///
    /// Expects the terminal to be in raw mode so Esc is seen without Enter.
    pub fn animate(&mut self, maze: &GridMaze, path: &Path) -> std::io::Result<RenderStatus> {
        let available = terminal::size()?;
        let needed = required_size(maze).unwrap_or((u16::MAX, u16::MAX));
        if needed.0 > available.0 || needed.1 > available.1 {
            tracing::warn!(?needed, ?available, "[render] terminal too small");
            return Ok(RenderStatus::TerminalTooSmall { needed, available });
        }

        self.draw_maze(maze)?;

        // Terminals keep their own colors
        let interior = path.cells().iter().skip(1).take(path.steps().saturating_sub(1));
        for &coord in interior {
            if self.wait_frame()? {
                tracing::debug!("[render] Esc key pressed, cancelling animation");
                self.finish(maze)?;
                return Ok(RenderStatus::Cancelled);
            }
            let (x, y) = screen_position(coord);
            queue!(
                self.out,
                cursor::MoveTo(x, y),
                style::PrintStyledContent(styled_route())
            )?;
            self.out.flush()?;
        }

        self.finish(maze)?;
        Ok(RenderStatus::Completed)
    }

    /// Moves the cursor below the maze. Only called once the maze is known to fit.
    fn finish(&mut self, maze: &GridMaze) -> std::io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, maze.rows() as u16), cursor::Show)?;
        self.out.flush()
    }
}
