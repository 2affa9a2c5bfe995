//! Terminal front end for the gridwalk searches.
//!
//! This crate plays the part of the renderer and the input layer: it
//! builds a random lattice, maps node states to colours, and redraws the
//! grid after every search step. Nothing here is needed by the search
//! crates themselves.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, PrintStyledContent, Stylize},
};
use gridwalk_core::{Grid, Node, NodeState, Point};
use gridwalk_paths::{Algorithm, SearchOutcome, StepObserver};
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Run one search on a random lattice and watch it in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "gridwalk", version, about)]
pub struct DemoConfig {
    /// Rows (and columns) of the lattice.
    #[arg(short, long, env = "GRIDWALK_ROWS", default_value_t = 25)]
    pub rows: usize,

    /// astar, dijkstra, bfs or bellman-ford (or 1-4).
    #[arg(short, long, env = "GRIDWALK_ALGORITHM", default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,

    /// Percentage of cells turned into barriers.
    #[arg(short, long, default_value_t = 25, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub barriers: u8,

    /// Percentage of cells flagged negative (Bellman-Ford only).
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub negative: u8,

    /// Seed for the layout generator.
    #[arg(short, long, env = "GRIDWALK_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Pause after each redraw, in milliseconds.
    #[arg(long, default_value_t = 15)]
    pub delay_ms: u64,

    /// Skip the step-by-step animation and only print the final grid.
    #[arg(long)]
    pub no_animate: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            algorithm: Algorithm::AStar,
            barriers: 25,
            negative: 0,
            seed: 42,
            delay_ms: 15,
            no_animate: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Build a lattice with Start in the top-left corner, End in the
/// bottom-right corner, and random barriers (plus negative nodes when the
/// algorithm honours them).
pub fn build_grid(cfg: &DemoConfig) -> Result<(Grid, Point, Point), Box<dyn std::error::Error>> {
    if cfg.rows < 2 {
        return Err(format!("need at least 2 rows, got {}", cfg.rows).into());
    }
    let mut rng = rand::rngs::StdRng::seed_from_u64(cfg.seed);
    let mut grid = Grid::new(cfg.rows);
    let last = cfg.rows as i32 - 1;
    let start = Point::new(0, 0);
    let end = Point::new(last, last);
    grid.place(start, NodeState::Start)?;
    grid.place(end, NodeState::End)?;

    let negatives = cfg.algorithm.supports_negative_weights() && cfg.negative > 0;
    for row in 0..=last {
        for col in 0..=last {
            let p = Point::new(row, col);
            if p == start || p == end {
                continue;
            }
            if rng.random_range(0..100u8) < cfg.barriers {
                grid.place(p, NodeState::Barrier)?;
            } else if negatives && rng.random_range(0..100u8) < cfg.negative {
                grid.mark_negative(p)?;
            }
        }
    }
    log::info!(
        "{0}x{0} grid, {1} barriers, {2} negative nodes",
        cfg.rows,
        grid.count(NodeState::Barrier),
        grid.iter().filter(|n| n.is_negative()).count()
    );
    Ok((grid, start, end))
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

const COL_UNVISITED: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const COL_OPEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const COL_CLOSED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const COL_BARRIER: Color = Color::Rgb { r: 60, g: 60, b: 60 };
const COL_START: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const COL_END: Color = Color::Rgb { r: 64, g: 224, b: 208 };
const COL_PATH: Color = Color::Rgb { r: 128, g: 0, b: 128 };
const COL_NEGATIVE: Color = Color::Rgb { r: 100, g: 100, b: 255 };

/// Glyph for a node. Negative nodes show through only while unvisited.
pub fn glyph(node: &Node) -> char {
    match node.state() {
        NodeState::Unvisited if node.is_negative() => '-',
        NodeState::Unvisited => '.',
        NodeState::Open => 'o',
        NodeState::Closed => 'x',
        NodeState::Barrier => '#',
        NodeState::Start => 'S',
        NodeState::End => 'E',
        NodeState::Path => '*',
    }
}

pub fn colour(node: &Node) -> Color {
    match node.state() {
        NodeState::Unvisited if node.is_negative() => COL_NEGATIVE,
        NodeState::Unvisited => COL_UNVISITED,
        NodeState::Open => COL_OPEN,
        NodeState::Closed => COL_CLOSED,
        NodeState::Barrier => COL_BARRIER,
        NodeState::Start => COL_START,
        NodeState::End => COL_END,
        NodeState::Path => COL_PATH,
    }
}

/// Plain-text rendering, one line per row.
pub fn render_plain(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for (i, node) in grid.iter().enumerate() {
        out.push(glyph(node));
        if (i + 1) % grid.rows() == 0 {
            out.push('\n');
        }
    }
    out
}

/// Queue a coloured frame at the top-left of the terminal.
pub fn draw<W: Write>(out: &mut W, grid: &Grid, header: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Print(header), Print("\r\n"))?;
    for (i, node) in grid.iter().enumerate() {
        let cell = format!("{} ", glyph(node)).with(colour(node));
        queue!(out, PrintStyledContent(cell))?;
        if (i + 1) % grid.rows() == 0 {
            queue!(out, Print("\r\n"))?;
        }
    }
    out.flush()
}

// ---------------------------------------------------------------------------
// Observer
// ---------------------------------------------------------------------------

/// Redraws the grid after every search step.
///
/// A failed write cannot be returned through the observer, so the first
/// error is kept and the run is cancelled at the next poll.
pub struct TerminalObserver<W: Write> {
    out: W,
    header: String,
    delay: Duration,
    animate: bool,
    frames: usize,
    error: Option<io::Error>,
}

impl<W: Write> TerminalObserver<W> {
    pub fn new(out: W, cfg: &DemoConfig) -> Self {
        Self {
            out,
            header: format!("Algorithm: {} (Ctrl-C aborts)", cfg.algorithm),
            delay: Duration::from_millis(cfg.delay_ms),
            animate: !cfg.no_animate,
            frames: 0,
            error: None,
        }
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Take the write error that stopped the run, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for TerminalObserver<W> {
    fn on_step(&mut self, grid: &Grid) {
        if !self.animate || self.error.is_some() {
            return;
        }
        if let Err(e) = draw(&mut self.out, grid, &self.header) {
            log::error!("redraw failed: {e}");
            self.error = Some(e);
            return;
        }
        self.frames += 1;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn should_cancel(&mut self) -> bool {
        self.error.is_some()
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// One-paragraph report of a finished run.
pub fn summary(algorithm: Algorithm, outcome: &SearchOutcome, cancelled: bool) -> String {
    let mut s = match (&outcome.path, cancelled) {
        (_, true) => format!("{algorithm}: cancelled"),
        (Some(_), false) => format!(
            "{algorithm}: path found, {} hops, cost {}",
            outcome.hops().unwrap_or_default(),
            outcome.cost.unwrap_or_default()
        ),
        (None, false) => format!("{algorithm}: no path"),
    };
    let st = &outcome.stats;
    s.push_str(&format!(
        " ({} opened, {} closed, {} steps",
        st.opened, st.closed, st.steps
    ));
    if st.relax_rounds > 0 {
        s.push_str(&format!(", {} relax rounds", st.relax_rounds));
    }
    s.push(')');
    if outcome.negative_cycle {
        s.push_str("\nwarning: negative weight cycle detected, path is best effort");
    }
    s
}
