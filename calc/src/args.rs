use clap::{Parser, ValueEnum};
use mpint::Bound;

/// Precision presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Precision {
    /// No limit on the number of limbs
    Unlimited,
    /// 32 bytes (8 limbs)
    Bytes32,
    /// 80 bytes (20 limbs), used by the demo
    Demo,
}

impl Precision {
    pub fn bound(self) -> Bound {
        match self {
            Precision::Unlimited => Bound::Unlimited,
            Precision::Bytes32 => Bound::from_bytes(32),
            Precision::Demo => Bound::from_bytes(80),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mpcalc")]
#[command(about = "Arbitrary-precision integer calculator", long_about = None)]
pub struct Cli {
    /// Precision preset
    #[arg(long, value_enum, default_value_t = Precision::Unlimited)]
    pub precision: Precision,
    /// Custom precision in bytes (rounded down to whole 4-byte limbs)
    #[arg(long, conflicts_with = "precision")]
    pub bytes: Option<usize>,
    /// Replay the demo script instead of reading stdin
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    /// Bound for the session. `--bytes` wins; `--demo` without an explicit
    /// size uses the demo preset.
    pub fn bound(&self) -> Bound {
        match (self.bytes, self.demo) {
            (Some(bytes), _) => Bound::from_bytes(bytes),
            (None, true) if self.precision == Precision::Unlimited => Precision::Demo.bound(),
            (None, _) => self.precision.bound(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mpcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_presets() {
        assert_eq!(parse(&[]).bound(), Bound::Unlimited);
        assert_eq!(parse(&["--precision", "bytes32"]).bound(), Bound::limbs(8));
        assert_eq!(parse(&["--precision", "demo"]).bound(), Bound::limbs(20));
    }

    #[test]
    fn test_bytes_and_demo() {
        assert_eq!(parse(&["--bytes", "10"]).bound(), Bound::limbs(2));
        assert_eq!(parse(&["--demo"]).bound(), Bound::limbs(20));
        assert_eq!(parse(&["--demo", "--precision", "bytes32"]).bound(), Bound::limbs(8));
    }

    #[test]
    fn test_conflicting_sizes() {
        assert!(Cli::try_parse_from(["mpcalc", "--bytes", "8", "--precision", "demo"]).is_err());
    }
}
