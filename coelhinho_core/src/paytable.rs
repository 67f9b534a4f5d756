use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::symbols::Symbol;

/// State mutation a winning line triggers. Applied once per winning line:
/// the same symbol paying on two lines applies its effect twice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SymbolEffect {
    None,
    AwardFreeSpins(u32),
    EndGame,
    /// Multiplies the per-tick settle probability until the next round
    /// resets it.
    SlowReels(f64),
}

/// How a winning line of one symbol pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payout {
    /// Multiple of the bet at stake.
    TimesBet(u64),
    /// Fixed amount regardless of the bet.
    Flat(u64),
}

impl Payout {
    pub fn amount(self, bet: u64) -> u64 {
        match self {
            Payout::TimesBet(multiplier) => multiplier * bet,
            Payout::Flat(amount) => amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub symbol: Symbol,
    pub payout: Payout,
    pub effect: SymbolEffect,
}

/// Per-symbol payout and effect table. Must cover the whole alphabet;
/// `validate` is called when an engine is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paytable(pub Vec<PaytableEntry>);

impl Paytable {
    pub fn standard() -> Self {
        Self(vec![
            PaytableEntry {
                symbol: Symbol::Cherry,
                payout: Payout::TimesBet(3),
                effect: SymbolEffect::None,
            },
            PaytableEntry {
                symbol: Symbol::Bell,
                payout: Payout::TimesBet(6),
                effect: SymbolEffect::None,
            },
            PaytableEntry {
                symbol: Symbol::Seven,
                payout: Payout::TimesBet(12),
                effect: SymbolEffect::None,
            },
            PaytableEntry {
                symbol: Symbol::Clover,
                payout: Payout::Flat(1),
                effect: SymbolEffect::AwardFreeSpins(1),
            },
            PaytableEntry {
                symbol: Symbol::Star,
                payout: Payout::Flat(1),
                effect: SymbolEffect::AwardFreeSpins(5),
            },
            PaytableEntry {
                symbol: Symbol::Skull,
                payout: Payout::Flat(1),
                effect: SymbolEffect::EndGame,
            },
            PaytableEntry {
                symbol: Symbol::Snail,
                payout: Payout::Flat(1),
                effect: SymbolEffect::SlowReels(0.1),
            },
        ])
    }

    /// Every symbol in the alphabet must appear exactly once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<Symbol> = Vec::with_capacity(self.0.len());
        for entry in &self.0 {
            if seen.contains(&entry.symbol) {
                return Err(ConfigError::DuplicateSymbol(entry.symbol));
            }
            seen.push(entry.symbol);
        }
        for symbol in Symbol::ALL {
            if !seen.contains(&symbol) {
                return Err(ConfigError::MissingSymbol(symbol));
            }
        }
        Ok(())
    }

    /// Reward and effect for a winning line of `symbol` at the given bet.
    /// `None` only on an unvalidated table.
    pub fn reward(&self, symbol: Symbol, bet: u64) -> Option<(u64, SymbolEffect)> {
        self.0
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| (e.payout.amount(bet), e.effect))
    }
}
