//! Headless match-3 session driven by an automated player.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, bail};
use clap::Parser;
use match3_core::{Event, FPS, GameConfig, Phase, PuzzleEngine, Snapshot};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use player::Policy;

mod player;

#[derive(Parser, Debug)]
#[command(name = "match3", version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of the clock
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 7)]
    width: u8,

    #[arg(long, default_value_t = 9)]
    height: u8,

    /// Number of tile kinds
    #[arg(long, default_value_t = 6)]
    kinds: u8,

    /// Length of the session before earned time
    #[arg(long, default_value_t = 60)]
    seconds: u32,

    #[arg(long, value_enum, default_value_t)]
    policy: Policy,

    /// Ticks the player waits in select before swapping
    #[arg(long, default_value_t = 20)]
    think: u32,

    /// Stop after this many ticks even if the game is not over
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,

    /// Give up after this many failed board generations
    #[arg(long, default_value_t = 3)]
    retries: u32,

    /// Flag tenpai tiles in the printed board
    #[arg(long)]
    hint: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct Stats {
    ticks: u64,
    swaps: u32,
    reverted: u32,
    rejected: u32,
    awards: u32,
    best_combo: u32,
    regenerated: u32,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    policy: Policy,
    score: u32,
    finished: bool,
    stats: Stats,
    snapshot: Snapshot,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };
    log::debug!("seed: {}", seed);

    let report = play(&args, seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.hint);
    }
    Ok(())
}

fn clock_seed() -> anyhow::Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the epoch")?;
    Ok(elapsed.as_nanos() as u64)
}

fn play(args: &Args, seed: u64) -> anyhow::Result<Report> {
    let config = GameConfig::new((args.width, args.height), args.kinds)
        .with_game_ticks(args.seconds.saturating_mul(FPS));
    let mut engine = PuzzleEngine::new(config, seed);
    let mut rng = SmallRng::seed_from_u64(seed.rotate_left(17));
    engine.set_hint(args.hint);
    engine.request_restart();

    let mut stats = Stats::default();
    let mut failures = 0;
    let mut idle = 0;

    while stats.ticks < args.max_ticks {
        if let Err(err) = engine.tick() {
            failures += 1;
            if failures > args.retries {
                bail!("giving up after {} failed generations: {}", failures, err);
            }
            log::warn!("{}, reseeding", err);
            engine.reseed(seed.wrapping_add(failures.into()));
        }
        engine.animate();
        stats.ticks += 1;

        for event in engine.take_events() {
            record(&mut stats, event);
        }

        match engine.phase() {
            Phase::Select => {
                idle += 1;
                if idle >= args.think {
                    idle = 0;
                    take_turn(&mut engine, args.policy, &mut rng)?;
                }
            }
            Phase::WaitRestart => break,
            _ => idle = 0,
        }
    }

    let finished = engine.phase().is_final();
    if !finished {
        log::warn!("stopped after {} ticks in {:?}", stats.ticks, engine.phase());
    }

    Ok(Report {
        seed,
        policy: args.policy,
        score: engine.score(),
        finished,
        stats,
        snapshot: engine.snapshot(),
    })
}

fn take_turn(
    engine: &mut PuzzleEngine,
    policy: Policy,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    let Some(intent) = policy.choose(engine.board(), rng) else {
        log::debug!("no productive swap found");
        return Ok(());
    };
    let outcome = engine
        .attempt_swap(intent.first, intent.second)
        .context("player picked a cell off the board")?;
    log::trace!("{:?} -> {:?}", intent, outcome);
    Ok(())
}

fn record(stats: &mut Stats, event: Event) {
    match event {
        Event::SwapAccepted => stats.swaps += 1,
        Event::SwapRejected => stats.rejected += 1,
        Event::SwapReverted => stats.reverted += 1,
        Event::ScoreAwarded { combo, points } => {
            stats.awards += 1;
            stats.best_combo = stats.best_combo.max(combo);
            log::info!("+ {} (combo {})", points, combo);
        }
        Event::Urgency => log::info!("hurry up"),
        Event::NoMoreMove => log::info!("no more move"),
        Event::BoardRegenerated => stats.regenerated += 1,
        Event::GameOver => log::info!("game over"),
    }
}

fn print_report(report: &Report, hint: bool) {
    let snapshot = &report.snapshot;
    let (width, height) = snapshot.size;

    for y in 0..height {
        let row: String = (0..width)
            .map(|x| match snapshot.cell((x, y)) {
                Some(cell) if hint && cell.hint => '*',
                Some(cell) => char::from_digit(cell.kind.get().into(), 36).unwrap_or('?'),
                None => '.',
            })
            .collect();
        println!("{}", row);
    }
    println!();
    println!("{}", snapshot.score_text);
    for line in snapshot.banner_lines() {
        println!("{}", line);
    }
    println!(
        "seed {} / {:?} / {} swaps ({} reverted) / best combo {} / {} ticks",
        report.seed,
        report.policy,
        report.stats.swaps,
        report.stats.reverted,
        report.stats.best_combo,
        report.stats.ticks,
    );
}
