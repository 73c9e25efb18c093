//! Parsing of the `<file>:<line>` and `<file>:<start>-<end>` argument.

use std::path::PathBuf;

use crate::error::Error;
use crate::types::{LineRef, Target};

/// Parse one line number. Values above `i64::MAX` are rejected, as are
/// signs other than a leading `+`.
fn parse_line_number(text: &str) -> Option<u64> {
    return text.parse::<i64>().ok().and_then(|n| return u64::try_from(n).ok());
}

/// Parse a line specifier: `42` or `10-20`.
///
/// # Errors
///
/// Returns `Error::InvalidLineRange` if a range does not have exactly two parts,
/// `Error::InvalidLineNumbers` if either end of a range is not an integer,
/// or `Error::InvalidLineNumber` if a single line is not an integer.
pub fn parse_line_spec(spec: &str) -> Result<LineRef, Error> {
    if !spec.contains('-') {
        let Some(line) = parse_line_number(spec) else {
            return Err(Error::InvalidLineNumber { spec: spec.to_string() });
        };
        return Ok(LineRef::Single(line));
    }

    let parts: Vec<&str> = spec.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(Error::InvalidLineRange { spec: spec.to_string() });
    };

    let (Some(start), Some(end)) = (parse_line_number(start), parse_line_number(end)) else {
        return Err(Error::InvalidLineNumbers { spec: spec.to_string() });
    };
    return Ok(LineRef::Range { end, start });
}

/// Parse the command argument into a file path and line reference.
/// The argument must contain exactly one `:`.
///
/// # Errors
///
/// Returns `Error::InvalidFormat` for zero or several `:` separators,
/// or any error from [`parse_line_spec`].
pub fn parse_target(input: &str) -> Result<Target, Error> {
    let parts: Vec<&str> = input.split(':').collect();
    let [path, spec] = parts.as_slice() else {
        return Err(Error::InvalidFormat { input: input.to_string() });
    };

    let line = parse_line_spec(spec)?;
    return Ok(Target {
        line,
        path: PathBuf::from(path),
    });
}
