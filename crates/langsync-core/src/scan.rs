//! Brace-scoped literal locator.
//!
//! Given a file's raw text and the byte offset just past an opening `{`,
//! [`find_closing_brace`] walks forward to the matching `}` while skipping
//! braces that appear inside quoted strings, including strings with escaped
//! quotes. This is the minimum machinery needed to treat an embedded
//! dictionary literal as a balanced region without a grammar for the host
//! file format.
//!
//! # Invariants
//!
//! 1. **Balanced span**: the returned offset closes the brace the scan
//!    started inside; every `{`/`}` pair strictly between them is balanced.
//!
//! 2. **Quote immunity**: brace characters inside single- or double-quoted
//!    strings never affect nesting depth, even when the string contains
//!    escaped quotes or escaped backslashes.
//!
//! 3. **Byte fidelity**: the scan never allocates or rewrites; offsets are
//!    byte offsets into the original text and always land on char
//!    boundaries.

use thiserror::Error;

/// Half-open byte range `[start, end)` covering the body of a brace
/// literal: `start` sits just past the opening `{`, `end` is the offset of
/// the matching `}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan {
    /// First byte of the literal body.
    pub start: usize,
    /// Offset of the matching closing brace.
    pub end: usize,
}

impl LiteralSpan {
    /// The literal body as a subslice of `text`.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie on char boundaries of `text`; spans
    /// produced by [`locate_literal`] always do.
    #[must_use]
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Length of the body in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the literal body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Why a literal could not be located in a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The configured marker text does not occur in the file.
    #[error("marker `{marker}` not found")]
    MarkerNotFound {
        /// The marker that was searched for.
        marker: String,
    },
    /// The marker occurs but no opening brace follows it.
    #[error("no opening brace after marker `{marker}`")]
    OpeningBraceNotFound {
        /// The marker that matched.
        marker: String,
    },
    /// The opening brace has no matching closing brace before end of text.
    #[error("unbalanced literal: no closing brace for the one at byte {open}")]
    UnbalancedLiteral {
        /// Byte offset of the unmatched opening brace.
        open: usize,
    },
}

/// Find the `}` matching the `{` that sits immediately before `start`.
///
/// The scan begins at implicit nesting depth 1. Outside strings, `{`
/// deepens and `}` shallows the nesting; reaching depth 0 yields the offset
/// of that closing brace. A `'` or `"` enters string mode until the same
/// quote character recurs unescaped; inside a string a backslash escapes
/// exactly the next character, so `\"` and `\\` never end the string early.
///
/// Returns `None` when the text ends before the literal closes, or when
/// `start` is out of range or not a char boundary.
#[must_use]
pub fn find_closing_brace(text: &str, start: usize) -> Option<usize> {
    let tail = text.get(start..)?;
    let mut depth = 1usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (offset, ch) in tail.char_indices() {
        match in_string {
            Some(quote) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == quote {
                    in_string = None;
                }
            }
            None => match ch {
                '\'' | '"' => in_string = Some(ch),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(start + offset);
                    }
                }
                _ => {}
            },
        }
    }

    None
}

/// Locate the dictionary literal introduced by `marker` inside `text`.
///
/// The marker must match the text immediately preceding the literal's
/// opening brace; it may include the brace itself (`"STRINGS = {"`) or stop
/// short of it (`"STRINGS ="`), in which case only whitespace may separate
/// the marker from the brace.
pub fn locate_literal(text: &str, marker: &str) -> Result<LiteralSpan, LocateError> {
    let marker_at = text.find(marker).ok_or_else(|| LocateError::MarkerNotFound {
        marker: marker.to_string(),
    })?;
    let after = marker_at + marker.len();

    let open = if marker.ends_with('{') {
        after - 1
    } else {
        opening_brace_after(text, after).ok_or_else(|| LocateError::OpeningBraceNotFound {
            marker: marker.to_string(),
        })?
    };

    let start = open + 1;
    let end =
        find_closing_brace(text, start).ok_or(LocateError::UnbalancedLiteral { open })?;
    Ok(LiteralSpan { start, end })
}

/// Offset of the first `{` at or after `from`, crossing whitespace only.
fn opening_brace_after(text: &str, from: usize) -> Option<usize> {
    for (offset, ch) in text.get(from..)?.char_indices() {
        if ch == '{' {
            return Some(from + offset);
        }
        if !ch.is_whitespace() {
            return None;
        }
    }
    None
}
