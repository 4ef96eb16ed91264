//! One calculator session: a precision bound plus the result history.

use mpint::{BigInt, Bound};
use tracing::debug;

use crate::error::CalcError;
use crate::history::History;
use crate::token::{tokenize, BinaryOp, Operand, Token};

/// What the caller should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print the text if there is any.
    Continue(Option<String>),
    Exit,
}

#[derive(Debug)]
pub struct Session {
    bound: Bound,
    history: History,
}

impl Session {
    pub fn new(bound: Bound) -> Self {
        Self {
            bound,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle one input line. Evaluation errors are reported as text and
    /// leave the history unchanged.
    pub fn process(&mut self, line: &str) -> Outcome {
        match line.trim() {
            "" => Outcome::Continue(None),
            "exit" => Outcome::Exit,
            "bank" => Outcome::Continue(self.bank()),
            expr => match self.evaluate(expr) {
                Ok(value) => Outcome::Continue(Some(format!("$1 = {value}"))),
                Err(err) => {
                    debug!(line = expr, %err, "evaluation failed");
                    Outcome::Continue(Some(format!("error: {err}")))
                }
            },
        }
    }

    /// Evaluate an expression and store its result as `$1`.
    pub fn evaluate(&mut self, expr: &str) -> Result<BigInt, CalcError> {
        let tokens = tokenize(expr)?;
        debug!(?tokens, "tokenized");
        let value = match tokens.as_slice() {
            [Token::Operand(operand), Token::Bang] => self.resolve(operand)?.factorial()?,
            [Token::Operand(first), rest @ ..] => self.fold(first, rest)?,
            _ => return Err(CalcError::Malformed),
        };
        self.history.push(value.clone());
        Ok(value)
    }

    /// `first op value op value ...`, strictly left to right.
    fn fold(&self, first: &Operand, rest: &[Token]) -> Result<BigInt, CalcError> {
        let mut acc = self.resolve(first)?;
        for pair in rest.chunks(2) {
            let [Token::Op(op), Token::Operand(operand)] = pair else {
                return Err(CalcError::Malformed);
            };
            let rhs = self.resolve(operand)?;
            acc = match op {
                BinaryOp::Add => &acc + &rhs,
                BinaryOp::Sub => &acc - &rhs,
                BinaryOp::Mul => &acc * &rhs,
                BinaryOp::Div => &acc / &rhs,
                BinaryOp::Rem => &acc % &rhs,
            }?;
        }
        Ok(acc)
    }

    fn resolve(&self, operand: &Operand) -> Result<BigInt, CalcError> {
        match operand {
            Operand::Literal(text) => Ok(BigInt::from_str_with_bound(text, self.bound)?),
            Operand::History { index, negated } => {
                let value = self.history.get(*index)?;
                Ok(if *negated { -value } else { value.clone() })
            }
        }
    }

    fn bank(&self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, value)| format!("${}: {value}", i + 1))
            .collect();
        Some(lines.join("\n"))
    }
}
