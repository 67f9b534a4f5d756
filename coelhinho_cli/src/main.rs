use anyhow::Result;
use clap::{Parser, Subcommand};
use coelhinho_core::{EngineConfig, GameEngine, SpinRng, REELS, ROWS};
use tracing::info;

#[derive(Parser)]
#[command(name = "coelhinho", about = "Headless driver for the coelhinho slot engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// RNG seed; a fresh entropy seed is used when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round, printing the window as each reel is stopped
    Round {
        /// Opening bet in currency units
        #[arg(long, default_value_t = 200)]
        bet: u64,
        /// Ticks to let the reels roll before stopping them one by one
        #[arg(long, default_value_t = 12)]
        ticks: u32,
    },
    /// Drive many rounds and report aggregate return-to-player numbers
    Simulate {
        #[arg(long, default_value_t = 1000)]
        rounds: u64,
        #[arg(long, default_value_t = 200)]
        bet: u64,
        #[arg(long, default_value_t = 8)]
        ticks_per_round: u32,
    },
}

fn build_engine(bet: u64, seed: Option<u64>) -> Result<GameEngine> {
    let config = EngineConfig {
        starting_bet: bet,
        ..EngineConfig::default()
    };
    let rng = match seed {
        Some(seed) => SpinRng::seeded(seed),
        None => SpinRng::from_entropy(),
    };
    Ok(GameEngine::new(config, rng)?)
}

fn print_window(engine: &GameEngine) {
    let cells = engine.grid().snapshot();
    for row in 0..ROWS {
        println!(
            "  {:?} {:?} {:?}",
            cells[0][row], cells[1][row], cells[2][row]
        );
    }
}

fn run_round(engine: &mut GameEngine, ticks: u32) -> Result<()> {
    let opening = engine.balance();
    engine.start_round();
    let staked = opening - engine.balance();
    info!(staked, "round started");

    for _ in 0..ticks {
        engine.tick();
    }
    for reel in 0..REELS {
        engine.stop_reel(reel)?;
        engine.tick();
        println!("reel {reel} stopped:");
        print_window(engine);
    }

    println!(
        "staked={} won={} balance={} free_spins={} game_over={}",
        staked,
        engine.balance() + staked - opening,
        engine.balance(),
        engine.free_spins(),
        engine.is_game_over()
    );
    Ok(())
}

fn run_simulation(engine: &mut GameEngine, rounds: u64, ticks_per_round: u32) -> Result<()> {
    let mut played = 0u64;
    let mut free_rounds = 0u64;
    let mut wagered = 0u64;
    let mut won = 0u64;

    for _ in 0..rounds {
        if engine.is_game_over() {
            break;
        }
        let opening = engine.balance();
        let free_before = engine.free_spins();
        engine.start_round();
        if !engine.any_spinning() {
            // balance below the minimum bet and no free spins left
            break;
        }
        if engine.free_spins() < free_before {
            free_rounds += 1;
        }
        let staked = opening - engine.balance();
        wagered += staked;

        for _ in 0..ticks_per_round {
            engine.tick();
        }
        for reel in 0..REELS {
            engine.stop_reel(reel)?;
        }
        engine.tick();

        won += engine.balance() + staked - opening;
        played += 1;
    }

    println!("rounds played: {played} ({free_rounds} free)");
    println!("wagered: {wagered}  won: {won}");
    if wagered > 0 {
        println!("rtp: {:.3}", won as f64 / wagered as f64);
    }
    println!(
        "final balance: {}  game over: {}",
        engine.balance(),
        engine.is_game_over()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Round { bet, ticks } => {
            let mut engine = build_engine(bet, cli.seed)?;
            run_round(&mut engine, ticks)?;
        }
        Commands::Simulate {
            rounds,
            bet,
            ticks_per_round,
        } => {
            let mut engine = build_engine(bet, cli.seed)?;
            run_simulation(&mut engine, rounds, ticks_per_round)?;
        }
    }

    Ok(())
}
