//! Entry point: CLI parsing, logging, catalog load, terminal setup and the
//! event loop.

mod audio;
mod catalog;
mod controller;
mod logging;
mod model;
mod platform;
mod view;

use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::controller::AppController;
use crate::model::AppModel;
use crate::view::AppView;

#[derive(Parser)]
#[command(about = "A mouse-driven terminal album browser and jukebox")]
struct Args {
    /// Path to the album catalog file
    #[arg(default_value = "albums.txt")]
    catalog: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(err) = logging::init_logging() {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    let catalog = catalog::load_catalog(&args.catalog)
        .with_context(|| format!("could not load catalog from {}", args.catalog.display()))?;
    if catalog.is_empty() {
        tracing::warn!(path = %args.catalog.display(), "Catalog contains no albums");
    }

    let transport = audio::open_transport();
    let mut controller = AppController::new(AppModel::new(catalog), transport);

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run_app(&mut terminal, &mut controller);

    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

/// One iteration per frame: tick, draw, then handle at most one input event.
/// The 50 ms poll timeout doubles as the completion-poll cadence.
fn run_app(terminal: &mut DefaultTerminal, controller: &mut AppController) -> anyhow::Result<()> {
    loop {
        controller.tick();

        let paused = controller.transport_paused();
        terminal.draw(|frame| {
            controller.model.regions = AppView::render(frame, &controller.model, paused);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => controller.handle_key_event(key),
                Event::Mouse(mouse) => controller.handle_mouse_event(mouse),
                _ => {}
            }
        }

        if controller.model.should_quit {
            tracing::info!("Quit requested, shutting down");
            return Ok(());
        }
    }
}
