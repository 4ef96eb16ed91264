//! Driving a [`Session`] from a line reader or a fixed script.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::session::{Outcome, Session};

pub const BANNER: &str = "To exit type 'exit', to show history type 'bank'";
pub const PROMPT: &str = ">> ";

/// The scripted walkthrough replayed by `--demo`.
pub const DEMO_SCRIPT: &[&str] = &["100+100", "5+1+1", "$1+$1", "bank", "100!", "exit"];

/// Read lines until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{BANNER}")?;
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if !emit(session.process(&line), &mut output)? {
            break;
        }
    }
    Ok(())
}

/// Replay `script`, echoing each command after the prompt. `pause` is slept
/// before every command.
pub fn run_script<W: Write>(
    session: &mut Session,
    script: &[&str],
    pause: Duration,
    mut output: W,
) -> io::Result<()> {
    for command in script {
        if !pause.is_zero() {
            thread::sleep(pause);
        }
        writeln!(output, "{PROMPT}{command}")?;
        if !emit(session.process(command), &mut output)? {
            break;
        }
    }
    Ok(())
}

/// Print an outcome; `false` once the session asked to exit.
fn emit<W: Write>(outcome: Outcome, output: &mut W) -> io::Result<bool> {
    match outcome {
        Outcome::Exit => Ok(false),
        Outcome::Continue(text) => {
            if let Some(text) = text {
                writeln!(output, "{text}")?;
            }
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpint::Bound;

    #[test]
    fn test_run_stops_at_exit() {
        let mut session = Session::new(Bound::Unlimited);
        let mut out = Vec::new();
        run(&mut session, "1+1\nexit\n2+2\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("$1 = 2"));
        assert!(!out.contains("$1 = 4"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_run_stops_at_eof() {
        let mut session = Session::new(Bound::Unlimited);
        let mut out = Vec::new();
        run(&mut session, "7*6".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(BANNER));
        assert!(out.contains(">> $1 = 42\n"));
    }
}
