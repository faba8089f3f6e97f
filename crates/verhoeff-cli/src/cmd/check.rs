//! Implementation of `verhoeff <DIGITS>`.
//!
//! Parses each digit string, reorders it into processing order according to
//! `--layout`, picks the mode (`--mode`, or inferred from the check
//! position), and writes one result per input.
//!
//! With `-` the inputs are processed in order and the run stops at the first
//! malformed line; results for earlier lines have already been written.
//!
//! Exit codes: 0 = success (an `invalid` verdict included), 2 = malformed input.
use std::io::Write;
use std::time::Instant;

use verhoeff_core::{
    Digit, DigitSequence, Layout, Mode, Outcome, ParseError, checksum, parse_digits,
};

use crate::cli::{Cli, DigitsArg, ModeArg};
use crate::error::CliError;
use crate::format::{
    FormatterConfig, write_result, write_timing_human, write_trace_human, write_warnings_human,
};
use crate::io::{InputLine, read_stdin, split_lines};

/// Per-input settings taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Requested mode.
    pub mode: ModeArg,
    /// Position of the check digit in the written input.
    pub layout: Layout,
    /// Maximum digits per input.
    pub max_digits: usize,
}

impl CheckOptions {
    /// Extracts the per-input settings from the parsed CLI.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            mode: cli.mode,
            layout: cli.layout.into(),
            max_digits: cli.max_digits,
        }
    }
}

/// Outcome for one input, plus what is needed to explain it.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The input exactly as given.
    pub input: String,
    /// The mode that was applied.
    pub mode: Mode,
    /// The sequence that was folded, in processing order.
    pub sequence: DigitSequence,
    /// The generated check digit or the verdict.
    pub outcome: Outcome,
    /// A non-zero check digit replaced by the placeholder in generate mode.
    pub ignored_check: Option<Digit>,
}

// ---------------------------------------------------------------------------
// evaluate
// ---------------------------------------------------------------------------

/// Computes the result for a single input.
///
/// # Errors
///
/// Returns [`CliError::InvalidDigits`] if the text is empty, contains a
/// non-digit character, or exceeds `options.max_digits`.
pub fn evaluate(input: &InputLine<'_>, options: &CheckOptions) -> Result<CheckResult, CliError> {
    let invalid = |error: ParseError| CliError::InvalidDigits {
        line: input.line,
        error,
    };

    let written = parse_digits(input.text, options.max_digits).map_err(invalid)?;
    let parsed = DigitSequence::from_written(&written, options.layout)
        .map_err(|_| invalid(ParseError::Empty))?;

    let (mode, sequence, ignored_check) = match options.mode.fixed() {
        None => (Mode::infer(&parsed), parsed, None),
        Some(Mode::Validate) => (Mode::Validate, parsed, None),
        Some(Mode::Generate) => {
            let existing = parsed.check_position();
            if existing == Digit::ZERO {
                (Mode::Generate, parsed, None)
            } else {
                let placeholder = parsed.with_check_digit(Digit::ZERO);
                (Mode::Generate, placeholder, Some(existing))
            }
        }
    };

    let outcome = checksum(&sequence, mode);
    Ok(CheckResult {
        input: input.text.to_owned(),
        mode,
        sequence,
        outcome,
        ignored_check,
    })
}

// ---------------------------------------------------------------------------
// check_all
// ---------------------------------------------------------------------------

/// Evaluates every input in order, writing results to `out` and diagnostics
/// to `err`. Returns the number of inputs processed.
///
/// # Errors
///
/// Stops at the first malformed input and returns its [`CliError`]; also
/// fails with [`CliError::OutputFailed`] if a write fails.
pub fn check_all<W: Write, E: Write>(
    inputs: &[InputLine<'_>],
    options: &CheckOptions,
    config: &FormatterConfig,
    out: &mut W,
    err: &mut E,
) -> Result<usize, CliError> {
    for input in inputs {
        let result = evaluate(input, options)?;
        write_trace_human(err, &result, config)?;
        write_warnings_human(err, &result, config)?;
        write_result(out, &result, config)?;
    }
    Ok(inputs.len())
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the command against stdout and stderr.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 for malformed or unreadable input,
/// and exit code 1 if output cannot be written.
pub fn run(cli: &Cli, config: &FormatterConfig) -> Result<(), CliError> {
    let options = CheckOptions::from_cli(cli);
    let start = Instant::now();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stderr = std::io::stderr();
    let mut err = stderr.lock();

    let count = match &cli.digits {
        DigitsArg::Literal(text) => {
            let input = InputLine {
                line: None,
                text: text.as_str(),
            };
            check_all(&[input], &options, config, &mut out, &mut err)?
        }
        DigitsArg::Stdin => {
            let content = read_stdin(cli.max_input_size)?;
            let lines = split_lines(&content);
            if lines.is_empty() {
                return Err(CliError::NoInput);
            }
            check_all(&lines, &options, config, &mut out, &mut err)?
        }
    };

    write_timing_human(&mut err, count, start.elapsed(), config)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
