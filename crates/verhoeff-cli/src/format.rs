/// Result and diagnostic formatting: human-readable and JSON (NDJSON) modes.
///
/// Results go to stdout:
///
/// - **Human mode** (default): `check digit = N`, `valid` or `invalid`, one
///   line per input.
/// - **JSON mode**: one self-contained JSON object per input.
///
/// Diagnostics go to stderr and honour a **quiet** flag (suppress warnings)
/// and a **verbose** flag (add the processing order of each input and the
/// total elapsed time).
use std::io::Write;
use std::time::Duration;

use serde::Serialize;
use verhoeff_core::{Digit, Mode, Outcome, Verdict};

use crate::cli::OutputFormat;
use crate::cmd::check::CheckResult;

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the formatter, derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct FormatterConfig {
    /// Output format for results.
    pub format: OutputFormat,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit processing order and timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Results (stdout)
// ---------------------------------------------------------------------------

/// JSON shape of a single result.
#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    input: &'a str,
    mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    check_digit: Option<Digit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<Verdict>,
}

impl<'a> From<&'a CheckResult> for ResultRecord<'a> {
    fn from(result: &'a CheckResult) -> Self {
        let (check_digit, verdict) = match result.outcome {
            Outcome::CheckDigit(d) => (Some(d), None),
            Outcome::Verdict(v) => (None, Some(v)),
        };
        Self {
            input: &result.input,
            mode: result.mode,
            check_digit,
            verdict,
        }
    }
}

/// Writes one result line in human format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_result_human<W: Write>(writer: &mut W, result: &CheckResult) -> std::io::Result<()> {
    writeln!(writer, "{}", result.outcome)
}

/// Writes one result as a single-line JSON object.
///
/// ```json
/// {"input":"0236","mode":"generate","check_digit":3}
/// ```
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_result_json<W: Write>(writer: &mut W, result: &CheckResult) -> std::io::Result<()> {
    let record = ResultRecord::from(result);
    serde_json::to_writer(&mut *writer, &record).map_err(std::io::Error::other)?;
    writeln!(writer)
}

/// Writes one result in the configured format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_result<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.format {
        OutputFormat::Human => write_result_human(writer, result),
        OutputFormat::Json => write_result_json(writer, result),
    }
}

// ---------------------------------------------------------------------------
// Diagnostics (stderr)
// ---------------------------------------------------------------------------

/// Writes the processing order used for one input. No-op unless verbose.
///
/// Format: `0236: generate, processing order 0 6 3 2`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_trace_human<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(
        writer,
        "{}: {}, processing order {}",
        result.input, result.mode, result.sequence
    )
}

/// Writes a warning for a check digit that generate mode discarded.
///
/// Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_warnings_human<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    if let Some(ignored) = result.ignored_check {
        writeln!(
            writer,
            "warning: {}: ignoring existing check digit {ignored}",
            result.input
        )?;
    }
    Ok(())
}

/// Writes timing information. No-op unless verbose.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    count: usize,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(
        writer,
        "checked {count} {} in {}us",
        pluralize(count, "number", "numbers"),
        duration.as_micros()
    )
}

fn pluralize<'a>(n: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if n == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
