//! Splitting an input line into operands and operators.

use crate::error::CalcError;

/// Binary operators, applied strictly left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '+' => BinaryOp::Add,
            '-' => BinaryOp::Sub,
            '*' => BinaryOp::Mul,
            '/' => BinaryOp::Div,
            '%' => BinaryOp::Rem,
            _ => return None,
        })
    }
}

/// A value position: a decimal literal or a `$k` history reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Unparsed decimal text, possibly with a leading `-`.
    Literal(String),
    /// `$k` (1-based, most recent first), optionally negated as `-$k`.
    History { index: usize, negated: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Operand(Operand),
    Op(BinaryOp),
    /// Postfix `!`.
    Bang,
}

/// Tokenize a line.
///
/// Digits and `$` accumulate into the current operand; whitespace and
/// operators end it. A `-` is a sign only when it starts an operand that
/// follows nothing or an operator, so `5-3` and `5 -3` subtract while
/// `5*-3` multiplies by a negative literal.
pub fn tokenize(line: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (position, ch) in line.char_indices() {
        if ch.is_ascii_digit() || ch == '$' {
            current.push(ch);
        } else if ch == '-' && current.is_empty() && expects_operand(&tokens) {
            current.push(ch);
        } else if ch == '!' {
            flush(&mut current, &mut tokens)?;
            tokens.push(Token::Bang);
        } else if let Some(op) = BinaryOp::from_char(ch) {
            flush(&mut current, &mut tokens)?;
            tokens.push(Token::Op(op));
        } else if ch.is_whitespace() {
            flush(&mut current, &mut tokens)?;
        } else {
            return Err(CalcError::InvalidCharacter { ch, position });
        }
    }
    flush(&mut current, &mut tokens)?;
    Ok(tokens)
}

fn expects_operand(tokens: &[Token]) -> bool {
    matches!(tokens.last(), None | Some(Token::Op(_)))
}

fn flush(current: &mut String, tokens: &mut Vec<Token>) -> Result<(), CalcError> {
    if current.is_empty() {
        return Ok(());
    }
    let text = std::mem::take(current);
    tokens.push(Token::Operand(classify(text)?));
    Ok(())
}

fn classify(text: String) -> Result<Operand, CalcError> {
    let (negated, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let Some(digits) = body.strip_prefix('$') else {
        return Ok(Operand::Literal(text));
    };
    match digits.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(Operand::History { index, negated }),
        _ => Err(CalcError::HistoryReference {
            reference: text.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Token {
        Token::Operand(Operand::Literal(s.to_string()))
    }

    fn hist(index: usize) -> Token {
        Token::Operand(Operand::History {
            index,
            negated: false,
        })
    }

    #[test]
    fn test_simple_expression() {
        assert_eq!(
            tokenize("100+100").unwrap(),
            vec![lit("100"), Token::Op(BinaryOp::Add), lit("100")]
        );
    }

    #[test]
    fn test_chained_with_history() {
        assert_eq!(
            tokenize("$1 * $12 % 7").unwrap(),
            vec![
                hist(1),
                Token::Op(BinaryOp::Mul),
                hist(12),
                Token::Op(BinaryOp::Rem),
                lit("7"),
            ]
        );
    }

    #[test]
    fn test_minus_sign_versus_operator() {
        assert_eq!(
            tokenize("-5-3").unwrap(),
            vec![lit("-5"), Token::Op(BinaryOp::Sub), lit("3")]
        );
        assert_eq!(
            tokenize("5 -3").unwrap(),
            vec![lit("5"), Token::Op(BinaryOp::Sub), lit("3")]
        );
        assert_eq!(
            tokenize("5*-3").unwrap(),
            vec![lit("5"), Token::Op(BinaryOp::Mul), lit("-3")]
        );
        assert_eq!(
            tokenize("-$2").unwrap(),
            vec![Token::Operand(Operand::History {
                index: 2,
                negated: true
            })]
        );
    }

    #[test]
    fn test_whitespace_separates_operands() {
        assert_eq!(tokenize("5 3").unwrap(), vec![lit("5"), lit("3")]);
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(tokenize("20!").unwrap(), vec![lit("20"), Token::Bang]);
        assert_eq!(tokenize("$3 !").unwrap(), vec![hist(3), Token::Bang]);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            tokenize("12 ^ 3").unwrap_err(),
            CalcError::InvalidCharacter { ch: '^', position: 3 }
        );
    }

    #[test]
    fn test_bad_history_references() {
        for bad in ["$", "$0", "$x", "$1$2"] {
            assert!(tokenize(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_stray_dollar_stays_a_literal() {
        // rejected later by the decimal parser
        assert_eq!(tokenize("1$2").unwrap(), vec![lit("1$2")]);
    }
}
