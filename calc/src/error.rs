use mpint::BigIntError;
use thiserror::Error;

/// Why a calculator line could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("malformed history reference {reference:?}")]
    HistoryReference { reference: String },
    #[error("history has no ${index} ({available} stored)")]
    HistoryIndex { index: usize, available: usize },
    #[error("expected `<value> (<op> <value>)*` or `<value>!`")]
    Malformed,
    #[error(transparent)]
    Engine(#[from] BigIntError),
}
