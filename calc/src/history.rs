use std::collections::VecDeque;

use mpint::BigInt;

use crate::error::CalcError;

/// Results kept for `$k` references.
pub const HISTORY_SIZE: usize = 5;

/// The most recent results, newest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<BigInt>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result as `$1`, dropping the oldest once full.
    pub fn push(&mut self, value: BigInt) {
        if self.entries.len() == HISTORY_SIZE {
            self.entries.pop_back();
        }
        self.entries.push_front(value);
    }

    /// `$index`, 1-based.
    pub fn get(&self, index: usize) -> Result<&BigInt, CalcError> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(CalcError::HistoryIndex {
                index,
                available: self.entries.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_capped() {
        let mut history = History::new();
        for v in 1..=7 {
            history.push(BigInt::from(v));
        }
        assert_eq!(history.len(), HISTORY_SIZE);
        assert_eq!(history.get(1).unwrap(), &BigInt::from(7));
        assert_eq!(history.get(5).unwrap(), &BigInt::from(3));
    }

    #[test]
    fn test_out_of_range() {
        let mut history = History::new();
        history.push(BigInt::from(1));
        assert_eq!(
            history.get(2).unwrap_err(),
            CalcError::HistoryIndex {
                index: 2,
                available: 1
            }
        );
        assert!(history.get(0).is_err());
    }
}
