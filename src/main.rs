//! Orbit Shooter - terminal entry point

use std::io::{self, BufWriter, Write, stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::Event;

use orbit_shooter::platform::terminal::fit_grid;
use orbit_shooter::platform::{FixedTimestep, TerminalSession, input};
use orbit_shooter::renderer::{FontMetrics, PixelGrid, build_frame};
use orbit_shooter::settings::{CliArgs, Settings};
use orbit_shooter::sim::{Flow, GamePhase, GameState, TickEvents, handle_inputs, tick};

/// Frame pacing for the terminal (about 60 FPS)
const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = CliArgs::parse();

    let mut settings = Settings::load(cli.config.as_deref());
    cli.apply(&mut settings);
    let font = FontMetrics::load_or_warn(&settings.font_path);

    let seed = settings.seed_or_clock();
    let mut state = GameState::new(seed, settings.difficulty);
    log::info!(
        "Orbit Shooter starting with seed {} on {}",
        seed,
        settings.difficulty.as_str()
    );

    let mut session = TerminalSession::enter(BufWriter::new(stdout()))?;
    let rx = input::spawn_reader();

    let result = run(&mut session, &mut state, &rx, font.as_ref(), &settings);

    // Always restore the terminal, even when the loop failed
    let restored = session.restore();
    result.and(restored)
}

fn run<W: Write>(
    session: &mut TerminalSession<W>,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    font: Option<&FontMetrics>,
    settings: &Settings,
) -> io::Result<()> {
    let mut timestep = FixedTimestep::new();
    let mut grid = PixelGrid::new(0, 0, state.field_size);
    let mut term_size = (0, 0);
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Input
        if handle_inputs(state, input::drain(rx)) == Flow::Exit {
            log::info!("Exiting with score {}", state.score);
            return Ok(());
        }

        // Simulation
        let dt = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;
        if state.phase == GamePhase::Play {
            let mut events = TickEvents::default();
            for _ in 0..timestep.advance(dt) {
                events.merge(tick(state));
            }
            log_events(state, &events);
        } else {
            timestep.reset();
        }

        // Rendering
        let size = session.size()?;
        if size != term_size {
            let (w, h) = fit_grid(size.0, size.1, state.field_size);
            log::debug!("Terminal {}x{}, grid {}x{}", size.0, size.1, w, h);
            grid = PixelGrid::new(w, h, state.field_size);
            term_size = size;
            session.clear()?;
        } else {
            grid.clear();
        }

        let frame = build_frame(state, font, settings);
        grid.fill_triangles(&frame.vertices);
        session.present(&grid, &frame.labels)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

fn log_events(state: &GameState, events: &TickEvents) {
    if events.hits.kills > 0 || events.hits.boss_hits > 0 {
        log::debug!(
            "{} kills, {} boss hits, +{} score (now {})",
            events.hits.kills,
            events.hits.boss_hits,
            events.hits.score,
            state.score
        );
    }
    if events.breached {
        log::info!(
            "Ring breached after {} ticks, final score {} (seed {})",
            state.time_ticks,
            state.score,
            state.seed
        );
    }
}
