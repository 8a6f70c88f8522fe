//! Terminal renderer.
//!
//! [`TerminalScene`] records draw requests into a shared [`Canvas`];
//! [`TerminalSurface`] rasterizes the canvas once per frame and writes only
//! the cells that changed.

mod viewport;

use std::io::{self, Stdout, Write};
use std::sync::Arc;

use asterism_anim::{LineHandle, Scene, StarMarker};
use asterism_types::Edge;
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, BeginSynchronizedUpdate, ClearType, EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::Vec3;
use parking_lot::Mutex;

pub use viewport::{Viewport, line_cells};

const LINE_COLOR: Color = Color::Rgb { r: 88, g: 104, b: 150 };
const STATUS_COLOR: Color = Color::Rgb { r: 140, g: 140, b: 160 };

/// Everything drawn so far.
#[derive(Debug, Default)]
pub struct Canvas {
    pub stars: Vec<StarMarker>,
    /// `(start, terminal point)` per line, in creation order.
    pub lines: Vec<(Vec3, Vec3)>,
}

pub type SharedCanvas = Arc<Mutex<Canvas>>;

/// [`Scene`] that draws into a [`SharedCanvas`].
pub struct TerminalScene {
    canvas: SharedCanvas,
}

impl TerminalScene {
    pub fn new(canvas: SharedCanvas) -> Self {
        Self { canvas }
    }
}

pub struct TerminalLine {
    canvas: SharedCanvas,
    index: usize,
}

impl Scene for TerminalScene {
    type Line = TerminalLine;

    fn place_star(&mut self, marker: StarMarker) {
        self.canvas.lock().stars.push(marker);
    }

    fn begin_line(&mut self, _edge: Edge, start: Vec3) -> TerminalLine {
        let mut canvas = self.canvas.lock();
        canvas.lines.push((start, start));
        TerminalLine { canvas: self.canvas.clone(), index: canvas.lines.len() - 1 }
    }
}

impl LineHandle for TerminalLine {
    fn set_end(&mut self, end: Vec3) {
        self.canvas.lock().lines[self.index].1 = end;
    }
}

/// Brighter stars (lower magnitude) get heavier glyphs.
pub fn star_glyph(magnitude: f32) -> char {
    match magnitude {
        m if m < 1.0 => '@',
        m if m < 2.0 => '*',
        m if m < 3.0 => '+',
        _ => '.',
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
}

const BLANK: Cell = Cell { ch: ' ', fg: Color::Reset };

/// Rasterize a canvas into a row-major cell grid.
fn rasterize(canvas: &Canvas, viewport: &Viewport, status: &str) -> Vec<Cell> {
    let (width, height) = viewport.size();
    let (w, h) = (usize::from(width), usize::from(height));
    let mut cells = vec![BLANK; w * h];

    let mut put = |(col, row): (i32, i32), cell: Cell| {
        if viewport.contains((col, row)) {
            cells[row as usize * w + col as usize] = cell;
        }
    };

    for (start, end) in &canvas.lines {
        let (Some(a), Some(b)) = (viewport.project(*start), viewport.project(*end)) else {
            continue;
        };
        for cell in line_cells(a, b) {
            put(cell, Cell { ch: '·', fg: LINE_COLOR });
        }
    }

    // Stars on top of lines
    for star in &canvas.stars {
        if let Some(cell) = viewport.project(star.position) {
            let c = star.color;
            put(cell, Cell { ch: star_glyph(star.magnitude), fg: Color::Rgb { r: c.red, g: c.green, b: c.blue } });
        }
    }

    if h > 0 {
        let row = (h - 1) * w;
        for (i, ch) in status.chars().take(w).enumerate() {
            cells[row + i] = Cell { ch, fg: STATUS_COLOR };
        }
    }
    cells
}

/// Alternate-screen surface, restored on drop.
///
/// Raw mode stays off so Ctrl-C still reaches the signal handler.
pub struct TerminalSurface {
    out: Stdout,
    viewport: Viewport,
    prev: Vec<Cell>,
    title: String,
}

impl TerminalSurface {
    /// Enter the alternate screen and fit `points` around `center`.
    pub fn enter(title: &str, center: Vec3, points: impl IntoIterator<Item = Vec3>) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let viewport = Viewport::fit(center, points, width, height);
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide, terminal::Clear(ClearType::All))?;
        tracing::debug!(width, height, "entered terminal surface");
        Ok(Self {
            out,
            viewport,
            prev: vec![BLANK; usize::from(width) * usize::from(height)],
            title: title.to_string(),
        })
    }

    /// Draw one frame.
    pub fn draw(&mut self, canvas: &Canvas, now: f64) -> io::Result<()> {
        let status = format!(" {}  {} stars  {} lines  t={:.2}s", self.title, canvas.stars.len(), canvas.lines.len(), now);
        let cur = rasterize(canvas, &self.viewport, &status);
        let width = usize::from(self.viewport.size().0);

        queue!(self.out, BeginSynchronizedUpdate)?;
        let mut fg = Color::Reset;
        for (i, cell) in cur.iter().enumerate() {
            if self.prev[i] == *cell {
                continue;
            }
            self.prev[i] = *cell;
            queue!(self.out, cursor::MoveTo((i % width) as u16, (i / width) as u16))?;
            if cell.fg != fg {
                fg = cell.fg;
                queue!(self.out, SetForegroundColor(fg))?;
            }
            queue!(self.out, Print(cell.ch))?;
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen) {
            tracing::warn!("failed to restore terminal: {}", e);
        }
    }
}
