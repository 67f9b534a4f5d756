use serde::{Deserialize, Serialize};

/// One reel face. The alphabet is closed: every weight and payout table
/// in the crate must cover exactly these seven symbols.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cherry,
    Bell,
    Seven,
    Clover,
    Star,
    Skull,
    Snail,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::Cherry,
        Symbol::Bell,
        Symbol::Seven,
        Symbol::Clover,
        Symbol::Star,
        Symbol::Skull,
        Symbol::Snail,
    ];

    pub fn from_index(i: u8) -> Self {
        match i % 7 {
            0 => Symbol::Cherry,
            1 => Symbol::Bell,
            2 => Symbol::Seven,
            3 => Symbol::Clover,
            4 => Symbol::Star,
            5 => Symbol::Skull,
            _ => Symbol::Snail,
        }
    }

    pub fn to_index(self) -> u8 {
        match self {
            Symbol::Cherry => 0,
            Symbol::Bell => 1,
            Symbol::Seven => 2,
            Symbol::Clover => 3,
            Symbol::Star => 4,
            Symbol::Skull => 5,
            Symbol::Snail => 6,
        }
    }
}

/// Draw weight for a single symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub symbol: Symbol,
    pub weight: f64,
}

/// Categorical draw weights over the symbol alphabet. Validated when a
/// `SymbolSource` is built from it: one entry per symbol, weights summing
/// to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolWeights(pub Vec<WeightEntry>);

impl SymbolWeights {
    pub fn standard() -> Self {
        Self(vec![
            WeightEntry {
                symbol: Symbol::Cherry,
                weight: 0.30,
            },
            WeightEntry {
                symbol: Symbol::Bell,
                weight: 0.15,
            },
            WeightEntry {
                symbol: Symbol::Seven,
                weight: 0.10,
            },
            WeightEntry {
                symbol: Symbol::Clover,
                weight: 0.15,
            },
            WeightEntry {
                symbol: Symbol::Star,
                weight: 0.10,
            },
            WeightEntry {
                symbol: Symbol::Skull,
                weight: 0.05,
            },
            WeightEntry {
                symbol: Symbol::Snail,
                weight: 0.15,
            },
        ])
    }
}
