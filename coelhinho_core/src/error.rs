use crate::symbols::Symbol;

/// A weight or payout table failed validation at construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("symbol weights sum to {0}, expected 1.0")]
    WeightSum(f64),
    #[error("weight for {0:?} is not a valid probability")]
    BadWeight(Symbol),
    #[error("{0:?} has no table entry")]
    MissingSymbol(Symbol),
    #[error("{0:?} appears more than once in the table")]
    DuplicateSymbol(Symbol),
}

/// A reel index or grid coordinate outside the 3x3 window. Caller bug;
/// never clamped.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{axis} index {index} is out of range (max {max})")]
pub struct OutOfRange {
    pub axis: &'static str,
    pub index: usize,
    pub max: usize,
}
