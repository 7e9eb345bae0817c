//! Line scanner for LS-8 program images.

use crate::error::LoadError;

/// Width of every literal, in binary digits.
const LITERAL_WIDTH: usize = 8;

/// Scan a single line of an image.
///
/// Returns `None` for blank lines and comment-only lines.
/// Comments start with `#` and extend to end of line.
pub(crate) fn scan_line(line: &str, line_num: usize) -> Result<Option<u8>, LoadError> {
    // Strip comment
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let literal = line.trim();
    if literal.is_empty() {
        return Ok(None);
    }

    let invalid = || LoadError::InvalidLiteral {
        line: line_num,
        token: literal.to_string(),
    };
    if literal.len() != LITERAL_WIDTH || !literal.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(invalid());
    }
    u8::from_str_radix(literal, 2).map(Some).map_err(|_| invalid())
}
