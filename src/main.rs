//! Qix Claim entry point
//!
//! Headless runner: asks for the win threshold, lets the demo autopilot play
//! on the fixed-step clock and prints a JSON summary when the run ends.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::Serialize;

use qix_claim::clock::FixedClock;
use qix_claim::config::{GameConfig, parse_win_threshold};
use qix_claim::render::{draw_frame, hud_text};
use qix_claim::sim::{Autopilot, GameEvent, GamePhase, GameSession, tick};

#[derive(Parser, Debug)]
#[command(name = "qix-claim")]
#[command(about = "Qix-style territory claiming, played by a demo autopilot")]
struct Args {
    /// JSON game configuration; missing fields use the classic defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Winning threshold in percent (skips the prompt)
    #[arg(short, long)]
    threshold: Option<u32>,

    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play the early prototype rules
    #[arg(long, conflicts_with = "config")]
    prototype: bool,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Extra games to play after the first one ends
    #[arg(long, default_value_t = 0)]
    restarts: u32,

    /// Run ticks back to back instead of in real time
    #[arg(long)]
    fast: bool,
}

/// End-of-run report
#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    phase: GamePhase,
    claimed_percent: f32,
    regions: usize,
    win_threshold: u32,
    ticks: u64,
    games: u32,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(config) = choose_threshold(config, args.threshold) else {
        eprintln!("No valid winning threshold given");
        return ExitCode::FAILURE;
    };

    let seed = args.seed.unwrap_or_else(time_seed);
    let mut session = match GameSession::new(config, seed) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Qix Claim starting: seed {seed}, win at {}%",
        session.config.win_threshold
    );

    let summary = run(&mut session, &args);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to write summary: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> qix_claim::error::Result<GameConfig> {
    if args.prototype {
        return Ok(GameConfig::prototype());
    }
    match &args.config {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

/// Apply the threshold from the command line, or prompt until a valid one is
/// entered. `None` when input runs out first.
fn choose_threshold(config: GameConfig, from_args: Option<u32>) -> Option<GameConfig> {
    if let Some(threshold) = from_args {
        return match config.with_win_threshold(threshold) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("{e}");
                None
            }
        };
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("What % is the winning threshold? ");
        // A failed flush only loses the prompt text
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("Failed to read input: {e}");
                return None;
            }
            None => return None,
        };
        match parse_win_threshold(&line, config.min_claim_percent)
            .and_then(|threshold| config.clone().with_win_threshold(threshold))
        {
            Ok(config) => return Some(config),
            Err(e) => println!("{e}. Try again."),
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Frame loop. Quit is only observed between ticks.
fn run(session: &mut GameSession, args: &Args) -> Summary {
    let mut pilot = Autopilot::new(args.restarts);
    let mut clock = FixedClock::new(session.config.tick_rate);
    let hud_every = u64::from(session.config.tick_rate) * 5;
    let mut last_frame = Instant::now();
    let mut ticks = 0u64;
    let mut games = 1u32;

    'frames: loop {
        let due = if args.fast {
            1
        } else {
            let now = Instant::now();
            let elapsed = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            clock.advance(elapsed)
        };

        for _ in 0..due {
            let input = pilot.next_input(session);
            if input.quit {
                log::info!("Autopilot quit");
                break 'frames;
            }
            tick(session, &input);
            ticks += 1;

            for event in session.drain_events() {
                log::debug!("Event: {event:?}");
                if event == GameEvent::Restarted {
                    games += 1;
                    clock.reset();
                }
            }
            if ticks % hud_every == 0 {
                log::info!("{}", hud_text(session.claimed_percent()));
            }
            if ticks >= args.max_ticks {
                log::warn!("Tick limit {} reached", args.max_ticks);
                break 'frames;
            }
        }

        let frame = draw_frame(session);
        log::trace!("Frame: {} draw commands", frame.len());

        if !args.fast {
            std::thread::sleep(Duration::from_secs_f32(clock.step() / 2.0));
        }
    }

    Summary {
        seed: session.seed,
        phase: session.phase,
        claimed_percent: session.claimed_percent(),
        regions: session.ledger.len(),
        win_threshold: session.config.win_threshold,
        ticks,
        games,
    }
}
