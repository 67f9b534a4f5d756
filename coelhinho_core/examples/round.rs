use coelhinho_core::{EngineConfig, GameEngine, SpinRng, REELS, ROWS};

fn main() {
    // Scripted end-to-end round with a fixed seed
    let mut engine =
        GameEngine::new(EngineConfig::default(), SpinRng::seeded(1)).expect("standard config");
    let opening = engine.balance();
    engine.start_round();
    let staked = opening - engine.balance();

    for _ in 0..10 {
        engine.tick();
    }
    for reel in 0..REELS {
        engine.stop_reel(reel).expect("reel index");
        engine.tick();
    }

    let cells = engine.grid().snapshot();
    for row in 0..ROWS {
        println!("{:?} {:?} {:?}", cells[0][row], cells[1][row], cells[2][row]);
    }
    println!(
        "staked={} won={} balance={} free_spins={} game_over={}",
        staked,
        engine.balance() + staked - opening,
        engine.balance(),
        engine.free_spins(),
        engine.is_game_over()
    );
}
