/// Stdin reading with size enforcement, UTF-8 validation, and line splitting.
///
/// `verhoeff-core` never touches I/O; when `<DIGITS>` is `-` all reading
/// happens here.
///
/// - The stream is wrapped in `Read::take` so allocation is bounded by
///   `--max-input-size`.
/// - UTF-8 validation reports the byte offset of the first bad sequence.
/// - All failures are [`CliError`] variants with exit code 2.
use std::io::Read;

use crate::error::CliError;

/// One digit string taken from the input, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine<'a> {
    /// 1-based line number, or `None` for the command-line argument.
    pub line: Option<usize>,
    /// The raw text, line terminator removed.
    pub text: &'a str,
}

/// Reads the whole stdin stream, capped at `max_size` bytes.
///
/// # Errors
///
/// See [`read_capped`].
pub fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    read_capped(stdin.lock(), max_size)
}

/// Reads `reader` to the end, failing if it yields more than `max_size` bytes.
///
/// One byte past the limit is requested so that a stream of exactly
/// `max_size` bytes is accepted and anything longer is rejected without
/// buffering the excess.
///
/// # Errors
///
/// - [`CliError::StdinReadError`] if the read fails.
/// - [`CliError::InputTooLarge`] if the stream exceeds `max_size`.
/// - [`CliError::InvalidUtf8`] if the bytes are not UTF-8.
pub fn read_capped<R: Read>(reader: R, max_size: u64) -> Result<String, CliError> {
    let mut limited = reader.take(max_size.saturating_add(1));
    let mut buf: Vec<u8> = Vec::new();

    limited
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::InputTooLarge { limit: max_size });
    }

    String::from_utf8(buf).map_err(|e| CliError::InvalidUtf8 {
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

/// Splits stdin content into digit strings, one per line.
///
/// Both `\n` and `\r\n` terminators are accepted. Empty lines are skipped but
/// still counted, so line numbers match what an editor shows.
pub fn split_lines(content: &str) -> Vec<InputLine<'_>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(idx, text)| InputLine {
            line: Some(idx + 1),
            text,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
