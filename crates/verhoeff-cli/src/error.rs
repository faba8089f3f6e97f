/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `verhoeff` binary. Every
/// variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The digits could not be read or parsed;
///   nothing was computed for the offending input. Clap uses the same code for
///   usage errors such as a missing or extra argument.
/// - Exit code **1**: the results could not be written.
///
/// An `invalid` verdict is a successful run and is not an error.
use std::fmt;

use verhoeff_core::ParseError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `verhoeff` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A digit string was empty, contained a non-digit character, or was too
    /// long.
    InvalidDigits {
        /// 1-based stdin line number, or `None` for the command-line argument.
        line: Option<usize>,
        /// The underlying parse failure.
        error: ParseError,
    },

    /// Stdin produced no digit strings.
    NoInput,

    /// Stdin exceeded the configured `--max-input-size` limit.
    InputTooLarge {
        /// The configured size limit in bytes.
        limit: u64,
    },

    /// The stdin bytes are not valid UTF-8.
    InvalidUtf8 {
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    // --- Exit code 1: output failures ---
    /// Writing results to stdout or diagnostics to stderr failed.
    OutputFailed {
        /// The underlying I/O error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDigits { .. }
            | Self::NoInput
            | Self::InputTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. } => 2,

            Self::OutputFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidDigits { line: None, error } => format!("error: {error}"),
            Self::InvalidDigits {
                line: Some(line),
                error,
            } => format!("error: line {line}: {error}"),
            Self::NoInput => "error: no digit strings on stdin".to_owned(),
            Self::InputTooLarge { limit } => {
                format!("error: input too large: stdin exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 { byte_offset } => {
                format!("error: invalid UTF-8 on stdin: first invalid byte at offset {byte_offset}")
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::OutputFailed { detail } => {
                format!("error: failed to write output: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::OutputFailed {
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
