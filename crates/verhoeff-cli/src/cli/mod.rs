//! Clap CLI definition: root struct and shared argument types.
use clap::{Parser, ValueEnum};
use verhoeff_core::{Layout, Mode};

/// The `<DIGITS>` argument: either a literal digit string or the stdin
/// sentinel `"-"`.
///
/// Parsing `"-"` yields [`DigitsArg::Stdin`]; anything else yields
/// [`DigitsArg::Literal`]. Validation of the literal happens later so that
/// malformed digits surface as a [`crate::error::CliError`] with exit code 2
/// rather than a clap usage error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigitsArg {
    /// Read one digit string per line from standard input.
    Stdin,
    /// A single digit string given on the command line.
    Literal(String),
}

impl std::str::FromStr for DigitsArg {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(DigitsArg::Stdin)
        } else {
            Ok(DigitsArg::Literal(s.to_owned()))
        }
    }
}

/// Output format for results on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `check digit = N`, `valid` or `invalid` (default).
    Human,
    /// One JSON object per input line (NDJSON).
    Json,
}

/// How to treat the check position of each input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Generate when the check position is `0`, validate otherwise (default).
    Auto,
    /// Always generate; an existing check digit is ignored.
    Generate,
    /// Always validate, including numbers whose check digit is `0`.
    Validate,
}

impl ModeArg {
    /// Resolves to a concrete [`Mode`], or `None` for [`ModeArg::Auto`].
    pub fn fixed(self) -> Option<Mode> {
        match self {
            Self::Auto => None,
            Self::Generate => Some(Mode::Generate),
            Self::Validate => Some(Mode::Validate),
        }
    }
}

/// Where the check digit is written in `<DIGITS>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// `<check><number>`: check digit (or placeholder `0`) first (default).
    CheckFirst,
    /// `<number><check>`: check digit (or placeholder `0`) last.
    CheckLast,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::CheckFirst => Layout::CheckDigitFirst,
            LayoutArg::CheckLast => Layout::CheckDigitLast,
        }
    }
}

/// Root CLI struct for the `verhoeff` binary.
#[derive(Parser, Debug)]
#[command(
    name = "verhoeff",
    version,
    about = "Generate or validate Verhoeff check digits",
    long_about = "Generate or validate Verhoeff check digits.\n\
                  \n\
                  DIGITS is <check digit><number>; use 0 as the check digit to\n\
                  generate one. Pass - to read one digit string per line from stdin."
)]
pub struct Cli {
    /// Digit string `<check digit><number>` (use 0 to generate), or `-` for stdin.
    #[arg(value_name = "DIGITS")]
    pub digits: DigitsArg,

    /// Generate or validate: auto (default), generate, or validate.
    #[arg(long, short = 'm', default_value = "auto", value_enum)]
    pub mode: ModeArg,

    /// Position of the check digit: check-first (default) or check-last.
    #[arg(long, short = 'l', default_value = "check-first", value_enum)]
    pub layout: LayoutArg,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", value_enum)]
    pub format: OutputFormat,

    /// Maximum number of digits per input, check position included.
    ///
    /// Can also be set via the `VERHOEFF_MAX_DIGITS` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    #[arg(
        long,
        env = "VERHOEFF_MAX_DIGITS",
        default_value_t = verhoeff_core::DEFAULT_MAX_DIGITS
    )]
    pub max_digits: usize,

    /// Maximum number of bytes read from stdin when DIGITS is `-`.
    ///
    /// Can also be set via the `VERHOEFF_MAX_INPUT_SIZE` environment variable.
    /// Default: 1048576 (1 MiB).
    #[arg(long, env = "VERHOEFF_MAX_INPUT_SIZE", default_value = "1048576")]
    pub max_input_size: u64,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the processing order of each input and the elapsed time to stderr
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,
}
