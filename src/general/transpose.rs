use std::borrow::Cow;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TransposeError, TransposeResult};

// ASCII digits only; `\d` would also accept other Unicode digit classes.
static NOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"note="([0-9]+)""#).expect("valid note regex"));
static NOTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"notes="([0-9;]+)""#).expect("valid notes regex"));

/// Shift a single note index by `offset` semitones.
///
/// No clamping and no octave wraparound: 0 shifted by 12 is 12, and
/// 0 shifted by -1 is -1.
pub fn shift_note(value: i64, offset: i32, line: usize) -> TransposeResult<i64> {
    value
        .checked_add(i64::from(offset))
        .ok_or(TransposeError::Overflow { line, value, offset })
}

fn parse_note(text: &str, line: usize) -> TransposeResult<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TransposeError::MalformedField {
            line,
            field: text.to_string(),
        });
    }
    text.parse::<i64>().map_err(|_| TransposeError::MalformedField {
        line,
        field: text.to_string(),
    })
}

fn splice(line: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..range.start]);
    out.push_str(replacement);
    out.push_str(&line[range.end..]);
    out
}

/// Transpose one line of a preset document.
///
/// A `note="N"` field wins over a `notes="A;B;C"` field; a line with
/// neither is returned borrowed and untouched. The replacement is spliced at
/// the exact position of the captured digits, so identical digit runs
/// elsewhere on the line are never touched. `line_no` is 1-based and only
/// used for error reporting.
pub fn transpose_line(line: &str, offset: i32, line_no: usize) -> TransposeResult<Cow<'_, str>> {
    if let Some(m) = NOTE_RE.captures(line).and_then(|c| c.get(1)) {
        let value = parse_note(m.as_str(), line_no)?;
        let shifted = shift_note(value, offset, line_no)?;
        return Ok(Cow::Owned(splice(line, m.range(), &shifted.to_string())));
    }

    if let Some(m) = NOTES_RE.captures(line).and_then(|c| c.get(1)) {
        let shifted = m
            .as_str()
            .split(';')
            .map(|part| {
                let value = parse_note(part, line_no)?;
                shift_note(value, offset, line_no).map(|v| v.to_string())
            })
            .collect::<TransposeResult<Vec<_>>>()?
            .join(";");
        return Ok(Cow::Owned(splice(line, m.range(), &shifted)));
    }

    Ok(Cow::Borrowed(line))
}

/// Transpose a whole preset document.
///
/// The text is split on `\n` and rejoined with `\n`, so line endings and a
/// missing (or present) trailing newline come out as they went in.
pub fn transpose_document(text: &str, offset: i32) -> TransposeResult<String> {
    let lines = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| transpose_line(line, offset, idx + 1))
        .collect::<TransposeResult<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
