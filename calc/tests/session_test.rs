use std::time::Duration;

use calc::repl::{self, DEMO_SCRIPT};
use calc::{Outcome, Session, HISTORY_SIZE};
use mpint::Bound;
use proptest::prelude::*;

fn output_of(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Continue(text) => text,
        Outcome::Exit => None,
    }
}

// ======================================================================
// Scripted sessions
// ======================================================================

#[test]
fn demo_script_transcript() {
    let mut session = Session::new(Bound::from_bytes(80));
    let mut out = Vec::new();
    repl::run_script(&mut session, DEMO_SCRIPT, Duration::ZERO, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    let expected = "\
>> 100+100
$1 = 200
>> 5+1+1
$1 = 7
>> $1+$1
$1 = 14
>> bank
$1: 14
$2: 7
$3: 200
>> 100!
$1 = 93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000
>> exit
";
    assert_eq!(out, expected);
}

#[test]
fn history_keeps_five_most_recent() {
    let mut session = Session::new(Bound::Unlimited);
    for i in 1..=8 {
        session.process(&i.to_string());
    }
    assert_eq!(session.history().len(), HISTORY_SIZE);
    let bank = output_of(session.process("bank")).unwrap();
    assert_eq!(bank, "$1: 8\n$2: 7\n$3: 6\n$4: 5\n$5: 4");
    assert!(output_of(session.process("$6")).unwrap().starts_with("error:"));
}

#[test]
fn bytes32_session_overflows_on_large_factorial() {
    let mut session = Session::new(Bound::from_bytes(32));
    assert_eq!(
        output_of(session.process("20!")).unwrap(),
        "$1 = 2432902008176640000"
    );
    let err = output_of(session.process("100!")).unwrap();
    assert!(err.starts_with("error: overflow"), "{err}");
    assert_eq!(session.history().len(), 1);
}

#[test]
fn big_operands_chain() {
    let mut session = Session::new(Bound::Unlimited);
    session.process("30!");
    let out = output_of(session.process("$1 / 28! % 1000")).unwrap();
    // '!' is only valid as a whole-line form
    assert!(out.starts_with("error:"));
    session.process("28!");
    assert_eq!(output_of(session.process("$2 / $1")).unwrap(), "$1 = 870");
}

// ======================================================================
// Robustness
// ======================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_any_line_is_handled(line in "[0-9$+*/%! -]{0,24}") {
        let mut session = Session::new(Bound::limbs(4));
        session.process("12345");
        let before = session.history().len();
        match session.process(&line) {
            Outcome::Exit => prop_assert!(false, "only `exit` ends a session"),
            Outcome::Continue(Some(text)) if text.starts_with("error:") => {
                prop_assert_eq!(session.history().len(), before);
            }
            Outcome::Continue(_) => {}
        }
    }
}
