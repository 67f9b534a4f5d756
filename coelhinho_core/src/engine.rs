use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, OutOfRange};
use crate::grid::{Grid, REELS, ROWS};
use crate::paytable::{Paytable, SymbolEffect};
use crate::rng::{SpinRng, SymbolSource};
use crate::symbols::{Symbol, SymbolWeights};

/// Tunables for one game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub starting_balance: u64,
    pub starting_bet: u64,
    pub min_bet: u64,
    pub bet_step: u64,
    /// Chance that a spinning reel redraws its column on a tick, before
    /// the spin-speed factor is applied.
    pub base_settle_probability: f64,
    pub weights: SymbolWeights,
    pub paytable: Paytable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_balance: 10_000,
            starting_bet: 200,
            min_bet: 200,
            bet_step: 100,
            base_settle_probability: 0.5,
            weights: SymbolWeights::standard(),
            paytable: Paytable::standard(),
        }
    }
}

/// Whether a reel is still rolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReelState {
    Spinning,
    Stopped,
}

impl ReelState {
    pub fn is_spinning(self) -> bool {
        matches!(self, ReelState::Spinning)
    }
}

/// Result of scoring a settled grid: the sum over all winning lines and
/// the effects they trigger, one entry per winning line.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub total_win: u64,
    pub effects: Vec<SymbolEffect>,
}

/// Scan the 8 paylines (3 rows, 3 columns, 2 diagonals) of a settled
/// grid. A line pays when its three symbols are identical; overlapping
/// winners all pay, there is no line priority.
pub fn evaluate_grid(grid: &Grid, paytable: &Paytable, bet: u64) -> SpinOutcome {
    let cells = grid.snapshot();
    let mut lines: Vec<[Symbol; 3]> = Vec::with_capacity(8);
    for col in 0..REELS {
        lines.push([cells[col][0], cells[col][1], cells[col][2]]);
    }
    for row in 0..ROWS {
        lines.push([cells[0][row], cells[1][row], cells[2][row]]);
    }
    lines.push([cells[0][0], cells[1][1], cells[2][2]]);
    lines.push([cells[0][2], cells[1][1], cells[2][0]]);

    let mut total_win = 0u64;
    let mut effects = Vec::new();
    for [a, b, c] in lines {
        if a == b && b == c {
            if let Some((amount, effect)) = paytable.reward(a, bet) {
                total_win += amount;
                if effect != SymbolEffect::None {
                    effects.push(effect);
                }
            }
        }
    }
    SpinOutcome { total_win, effects }
}

/// Serializable snapshot of everything a presentation layer displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub balance: u64,
    pub bet: u64,
    pub free_spins: u32,
    pub game_over: bool,
    pub grid: Grid,
    pub spinning: [bool; REELS],
}

/// The game aggregate: wallet, bonus state, reel states and the grid,
/// advanced one external tick at a time. All mutation goes through the
/// intent methods; callers read snapshots.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    source: SymbolSource,
    rng: SpinRng,
    grid: Grid,
    reels: [ReelState; REELS],
    balance: u64,
    bet: u64,
    free_spins: u32,
    spin_speed_factor: f64,
    win_checked: bool,
    game_over: bool,
}

impl GameEngine {
    /// Validates the weight and payout tables, draws the initial window
    /// and starts in the idle state.
    pub fn new(config: EngineConfig, mut rng: SpinRng) -> Result<Self, ConfigError> {
        let source = SymbolSource::new(&config.weights)?;
        config.paytable.validate()?;
        let grid = Grid::from_columns(std::array::from_fn(|_| source.draw_column(&mut rng)));
        Ok(Self {
            grid,
            reels: [ReelState::Stopped; REELS],
            balance: config.starting_balance,
            bet: config.starting_bet,
            free_spins: 0,
            spin_speed_factor: 1.0,
            // no round in flight yet, so nothing to score
            win_checked: true,
            game_over: false,
            config,
            source,
            rng,
        })
    }

    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, SpinRng::seeded(seed))
    }

    // ---- intents ------------------------------------------------------

    pub fn increase_bet(&mut self) {
        if self.game_over {
            return;
        }
        self.bet = (self.bet + self.config.bet_step).min(self.balance);
    }

    pub fn decrease_bet(&mut self) {
        if self.game_over {
            return;
        }
        self.bet = self
            .bet
            .saturating_sub(self.config.bet_step)
            .max(self.config.min_bet);
    }

    /// Begin a round. Silent no-op while a reel spins, after game over,
    /// or when there is no free spin and the balance cannot cover the
    /// minimum bet; a UI may send stale clicks and none of these are
    /// errors. A free spin is consumed instead of a debit when available.
    pub fn start_round(&mut self) {
        if self.game_over || self.any_spinning() {
            return;
        }
        if self.free_spins == 0 && self.balance < self.config.min_bet {
            return;
        }
        if self.free_spins > 0 {
            self.free_spins -= 1;
        } else {
            self.bet = self.bet.min(self.balance);
            self.balance -= self.bet;
        }
        self.reels = [ReelState::Spinning; REELS];
        self.spin_speed_factor = 1.0;
        self.win_checked = false;
    }

    /// Freeze reel `reel` on whatever it shows right now. No-op if the
    /// reel is already stopped or the game is over.
    pub fn stop_reel(&mut self, reel: usize) -> Result<(), OutOfRange> {
        if reel >= REELS {
            return Err(OutOfRange {
                axis: "reel",
                index: reel,
                max: REELS - 1,
            });
        }
        if !self.game_over {
            self.reels[reel] = ReelState::Stopped;
        }
        Ok(())
    }

    /// Advance one frame: every spinning reel redraws its column with
    /// probability `base_settle_probability * spin_speed_factor`. Once
    /// all reels have stopped the round is scored exactly once.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        let settle = self.config.base_settle_probability * self.spin_speed_factor;
        for reel in 0..REELS {
            if self.reels[reel].is_spinning() && self.rng.roll(settle) {
                let column = self.source.draw_column(&mut self.rng);
                self.grid
                    .fill_column(reel, column)
                    .expect("reel index in range");
            }
        }
        if !self.any_spinning() && !self.win_checked {
            self.settle_round();
        }
    }

    fn settle_round(&mut self) {
        let outcome = evaluate_grid(&self.grid, &self.config.paytable, self.bet);
        for effect in &outcome.effects {
            self.apply_effect(*effect);
        }
        self.balance += outcome.total_win;
        self.win_checked = true;
        if self.balance == 0 && self.free_spins == 0 {
            self.game_over = true;
        }
    }

    fn apply_effect(&mut self, effect: SymbolEffect) {
        match effect {
            SymbolEffect::None => {}
            SymbolEffect::AwardFreeSpins(n) => self.free_spins += n,
            SymbolEffect::EndGame => self.game_over = true,
            SymbolEffect::SlowReels(factor) => self.spin_speed_factor = factor,
        }
    }

    // ---- read model ---------------------------------------------------

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn free_spins(&self) -> u32 {
        self.free_spins
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn spin_speed_factor(&self) -> f64 {
        self.spin_speed_factor
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn reel_spinning(&self) -> [bool; REELS] {
        self.reels.map(ReelState::is_spinning)
    }

    pub fn any_spinning(&self) -> bool {
        self.reels.iter().any(|r| r.is_spinning())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn view(&self) -> GameView {
        GameView {
            balance: self.balance,
            bet: self.bet,
            free_spins: self.free_spins,
            game_over: self.game_over,
            grid: self.grid,
            spinning: self.reel_spinning(),
        }
    }
}
