//! A small calculator over [`mpint`] values.
//!
//! A [`Session`] evaluates one line at a time: `<value> (<op> <value>)*`
//! with `+ - * / %` applied left to right, or `<value>!`. Values are decimal
//! literals or `$k` references to the five most recent results.

pub mod error;
pub mod history;
pub mod repl;
pub mod session;
pub mod token;

pub use error::CalcError;
pub use history::{History, HISTORY_SIZE};
pub use session::{Outcome, Session};
