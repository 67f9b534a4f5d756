pub mod engine;
pub mod error;
pub mod grid;
pub mod paytable;
pub mod rng;
pub mod symbols;

pub use crate::engine::{evaluate_grid, EngineConfig, GameEngine, GameView, ReelState, SpinOutcome};
pub use crate::error::{ConfigError, OutOfRange};
pub use crate::grid::{Grid, REELS, ROWS};
pub use crate::paytable::{Payout, Paytable, PaytableEntry, SymbolEffect};
pub use crate::rng::{SpinRng, SymbolSource};
pub use crate::symbols::{Symbol, SymbolWeights, WeightEntry};
