//! Pixel Bounce demo runner (default binary).
//!
//! Spawns a few hundred bouncing rectangles and circles and renders them into
//! the terminal. Window size, colors and pacing come from `PIXEL_BOUNCE_*`
//! environment variables. Quit with `q`, `Esc` or `Ctrl-C`.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

use pixel_bounce::core::{Entity, SimpleRng, Simulation};
use pixel_bounce::term::{TerminalRenderer, TerminalSurface};
use pixel_bounce::types::{Color, SimConfig};

const DEMO_TITLE: &str = "pixel bounce";
const DEMO_BACKGROUND: Color = Color::new(0x000033);
const DEMO_SEED: u32 = 0;

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The terminal is in the alternate screen, so logs only go to a file.
    match std::env::var("PIXEL_BOUNCE_LOG_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            let file = File::create(path.trim())
                .with_context(|| format!("failed to create log file {path}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let mut config = SimConfig::from_env().with_debug_summary(true);
    if std::env::var_os("PIXEL_BOUNCE_TITLE").is_none() {
        config.title = DEMO_TITLE.to_string();
    }
    if std::env::var_os("PIXEL_BOUNCE_BACKGROUND").is_none() {
        config.background = DEMO_BACKGROUND;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(config: SimConfig) -> Result<()> {
    let surface = TerminalSurface::new(config.width, config.height);
    let mut sim = Simulation::new(config)?;
    sim.start(surface)?;

    spawn_demo_scene(&sim)?;
    info!(entities = sim.entity_count(), "demo scene spawned");

    while sim.is_running() {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    break;
                }
            }
        }
    }

    sim.stop()?;
    Ok(())
}

fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Registers entities while the loop is already running.
fn spawn_demo_scene(sim: &Simulation) -> Result<()> {
    let mut rng = SimpleRng::new(DEMO_SEED);

    for _ in 0..200 {
        let rect = Entity::rectangle(
            rng.range(20, 200),
            rng.range(20, 200),
            rng.range(20, 40),
            rng.range(20, 40),
        )?
        .with_velocity(rng.range(0, 600), rng.range(0, 600))
        .with_color(rng.color())
        .with_render_layer(3)
        .with_borders(true);
        sim.add_entity(rect);
    }

    for _ in 0..1500 {
        let circle = Entity::circle(rng.range(5, 15), rng.range(20, 400), rng.range(20, 400))?
            .with_velocity(rng.range(0, 600), rng.range(0, 600))
            .with_color(rng.color())
            .with_render_layer(1)
            .with_borders(true);
        sim.add_entity(circle);
    }

    let big = Entity::circle(50, 100, 100)?
        .with_velocity(100, 100)
        .with_color(Color::BLACK)
        .with_render_layer(5)
        .with_borders(true);
    sim.add_entity(big);

    Ok(())
}
