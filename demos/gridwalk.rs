//! Terminal path-search visualizer.
//!
//! Run: cargo run --bin gridwalk -- --algorithm dijkstra --rows 30

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{Clear, ClearType},
};
use gridwalk_demos::{DemoConfig, TerminalObserver, build_grid, render_plain, summary};
use gridwalk_paths::InterruptObserver;
use tracing_subscriber::EnvFilter;

static STOP: AtomicBool = AtomicBool::new(false);

fn run(cfg: DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    ctrlc::set_handler(|| STOP.store(true, Ordering::Relaxed))?;

    let (mut grid, start, end) = build_grid(&cfg)?;
    log::info!("running {} from {start} to {end}", cfg.algorithm);

    let animate = !cfg.no_animate;
    let mut stdout = io::stdout();
    if animate {
        execute!(stdout, Clear(ClearType::All), Hide)?;
    }

    let mut observer = InterruptObserver::new(TerminalObserver::new(stdout, &cfg), &STOP);
    let outcome = cfg.algorithm.run(&mut grid, start, end, &mut observer);
    let mut term = observer.into_inner();
    let draw_error = term.take_error();

    let mut stdout = term.into_inner();
    if animate {
        execute!(stdout, Show)?;
    }
    if let Some(e) = draw_error {
        return Err(e.into());
    }

    if !animate {
        print!("{}", render_plain(&grid));
    }
    let cancelled = STOP.load(Ordering::Relaxed);
    println!("{}", summary(cfg.algorithm, &outcome, cancelled));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = DemoConfig::parse();
    if let Err(e) = run(cfg) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
