use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, error, info};
use retro_snake::audio::{self, AudioSink, Cue, TerminalBell};
use retro_snake::clock::TickClock;
use retro_snake::config::{FRAME_INTERVAL, GRID, THEME_RETRO, TICK_INTERVAL};
use retro_snake::error::AppError;
use retro_snake::game::Game;
use retro_snake::input::InputHandler;
use retro_snake::logging;
use retro_snake::renderer;
use retro_snake::terminal_runtime::{self, TerminalSession};

#[derive(Debug, Parser)]
#[command(name = "retro-snake", version, about = "Retro Snake in the terminal")]
struct Cli {
    /// Seed food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here instead of the per-user data directory.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug or trace.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,

    /// Ring the terminal bell when food is eaten and on game over.
    #[arg(long)]
    bell: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("fatal: {error}");
            eprintln!("retro-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: Cli) -> Result<(), AppError> {
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level)?;
    info!("starting retro-snake, logging to {}", log_path.display());

    terminal_runtime::ensure_fits(GRID)?;
    terminal_runtime::install_panic_hook();

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, &cli);
    drop(session);

    info!("retro-snake exited");
    result
}

fn run(session: &mut TerminalSession, cli: &Cli) -> Result<(), AppError> {
    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(GRID, seed),
        None => Game::new(GRID),
    };
    let mut input = InputHandler::default();
    let mut sound = TerminalBell::new(io::stdout(), cli.bell);
    let mut clock = TickClock::new(TICK_INTERVAL, Instant::now());

    info!("session started, tick interval {:?}", clock.interval());
    sound.play(Cue::Soundtrack);

    loop {
        if clock.event_triggered(Instant::now()) && game.is_running() {
            let events = game.tick();
            audio::dispatch(&mut sound, &events);
        }

        let frame_input = input.poll_frame()?;
        if frame_input.quit {
            return Ok(());
        }
        for direction in frame_input.directions() {
            game.request_direction(direction);
        }

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game, &THEME_RETRO))?;

        thread::sleep(FRAME_INTERVAL);
    }
}
