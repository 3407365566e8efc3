//! Byte-precise edits inside a located dictionary literal.
//!
//! Removal deletes whole key-value lines by pattern match; insertion
//! appends rendered lines just before the closing brace, fixing up a
//! missing trailing comma on whatever entry was last. Both operations
//! reproduce every byte outside the span, and every non-matching line
//! inside it, unchanged.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Key absent on removal | Entry already gone | No-op for that key |
//! | Entry not newline-anchored | Single-line literal | Entry survives removal |
//! | Last entry removed | Dangling comma on new last entry | Tolerated; host formats accept trailing separators |

use regex_lite::Regex;

use crate::scan::LiteralSpan;

/// Escape a value for embedding in a double-quoted entry.
///
/// Backslashes are escaped first so the quote and newline escapes that
/// follow are not themselves doubled.
#[must_use]
pub fn escape_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Pattern matching one whole entry line for `key`: a preceding newline,
/// optional horizontal indent, the quoted key, a colon, a single- or
/// double-quoted value honoring backslash escapes, and an optional comma.
///
/// Anchoring on the newline and the quoted value keeps the match from
/// landing inside a multi-line value elsewhere in the literal.
fn entry_pattern(key: &str) -> Regex {
    let key = regex_lite::escape(key);
    let pattern = format!(
        "\n[ \t]*[\"']{key}[\"'][ \t]*:[ \t]*(?:\"(?:[^\"\\\\]|\\\\.)*\"|'(?:[^'\\\\]|\\\\.)*')[ \t]*,?"
    );
    Regex::new(&pattern).expect("entry pattern regex")
}

/// Whether the literal at `span` already holds an entry line for `key`.
///
/// Matches with the same newline-anchored pattern removal uses, so a
/// `true` here means removal would find the entry and insertion would
/// duplicate it.
#[must_use]
pub fn contains_entry(text: &str, span: LiteralSpan, key: &str) -> bool {
    entry_pattern(key).is_match(&text[span.start..span.end])
}

/// Remove the entries for `keys` from the literal at `span`.
///
/// Returns the rewritten text and the number of entries actually removed.
/// A key with no matching line contributes nothing and is not an error:
/// absence means already clean.
#[must_use]
pub fn remove_entries(text: &str, span: LiteralSpan, keys: &[String]) -> (String, usize) {
    let mut out = text.to_string();
    let mut end = span.end;
    let mut removed = 0usize;

    for key in keys {
        let pattern = entry_pattern(key);
        let found = pattern
            .find(&out[span.start..end])
            .map(|m| (m.start(), m.len()));
        let Some((offset, len)) = found else {
            continue;
        };
        let at = span.start + offset;
        out.replace_range(at..at + len, "");
        end -= len;
        removed += 1;
    }

    (out, removed)
}

/// Append entries for `keys` to the literal at `span`, one line each.
///
/// If the last non-whitespace character of the body is neither the opening
/// brace (empty literal) nor a comma, a comma is appended right after it so
/// the previously-last entry gains its separator; the backward scan crosses
/// whitespace only and never enters a value. Each entry renders as
/// `indent"key": "value",` with [`escape_value`] applied, and the block is
/// inserted immediately before the closing brace. Existing entries are
/// never reordered or rewritten.
#[must_use]
pub fn insert_entries(
    text: &str,
    span: LiteralSpan,
    entries: &[(String, String)],
    indent: &str,
) -> String {
    let mut out = text.to_string();
    let mut end = span.end;

    let body = &out[span.start..end];
    if let Some((at, ch)) = body.char_indices().rev().find(|(_, c)| !c.is_whitespace()) {
        if ch != ',' {
            out.insert(span.start + at + ch.len_utf8(), ',');
            end += 1;
        }
    }

    let mut block = String::new();
    for (key, value) in entries {
        block.push_str(indent);
        block.push('"');
        block.push_str(key);
        block.push_str("\": \"");
        block.push_str(&escape_value(value));
        block.push_str("\",\n");
    }
    out.insert_str(end, &block);

    out
}

#[cfg(test)]
mod tests {
    use crate::scan::locate_literal;

    use super::{contains_entry, escape_value, insert_entries, remove_entries};

    const MARKER: &str = "STRINGS = {";

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn escape_value_orders_backslash_first() {
        assert_eq!(escape_value(r"a\b"), r"a\\b");
        assert_eq!(escape_value("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_value("line1\nline2"), "line1\\nline2");
        // A backslash-quote pair must not be double-escaped out of order.
        assert_eq!(escape_value("\\\""), "\\\\\\\"");
    }

    #[test]
    fn insert_appends_before_closing_brace() {
        let text = "STRINGS = {\n    \"a\": \"Hello\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let updated = insert_entries(text, span, &entries(&[("b", "[TODO] World")]), "    ");
        assert_eq!(
            updated,
            "STRINGS = {\n    \"a\": \"Hello\",\n    \"b\": \"[TODO] World\",\n}\n"
        );
    }

    #[test]
    fn insert_fixes_missing_separator_on_last_entry() {
        let text = "STRINGS = {\n    \"a\": \"Hello\"\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let updated = insert_entries(text, span, &entries(&[("b", "World")]), "    ");
        assert_eq!(
            updated,
            "STRINGS = {\n    \"a\": \"Hello\",\n    \"b\": \"World\",\n}\n"
        );
    }

    #[test]
    fn insert_into_empty_literal_adds_no_separator() {
        let text = "STRINGS = {\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let updated = insert_entries(text, span, &entries(&[("a", "Hello")]), "    ");
        assert_eq!(updated, "STRINGS = {\n    \"a\": \"Hello\",\n}\n");
    }

    #[test]
    fn insert_preserves_bytes_outside_span() {
        let text = "# header\nSTRINGS = {\n    \"a\": \"x\",\n}\n# footer\n";
        let span = locate_literal(text, MARKER).expect("span");
        let updated = insert_entries(text, span, &entries(&[("b", "y")]), "    ");
        assert!(updated.starts_with("# header\n"));
        assert!(updated.ends_with("}\n# footer\n"));
    }

    #[test]
    fn insert_escapes_value_content() {
        let text = "STRINGS = {\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let updated = insert_entries(text, span, &entries(&[("a", "say \"hi\"\n")]), "    ");
        assert_eq!(updated, "STRINGS = {\n    \"a\": \"say \\\"hi\\\"\\n\",\n}\n");
    }

    #[test]
    fn insert_multiple_entries_in_caller_order() {
        let text = "STRINGS = {\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let updated = insert_entries(text, span, &entries(&[("a", "1"), ("b", "2")]), "  ");
        assert_eq!(
            updated,
            "STRINGS = {\n  \"a\": \"1\",\n  \"b\": \"2\",\n}\n"
        );
    }

    #[test]
    fn remove_deletes_whole_entry_line() {
        let text = "STRINGS = {\n    \"a\": \"X\",\n    \"c\": \"Y\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["c"]));
        assert_eq!(updated, "STRINGS = {\n    \"a\": \"X\",\n}\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn remove_handles_single_quoted_entries() {
        let text = "STRINGS = {\n    'a': 'X',\n    'c': 'it\\'s',\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["c"]));
        assert_eq!(updated, "STRINGS = {\n    'a': 'X',\n}\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn remove_absent_key_is_a_no_op() {
        let text = "STRINGS = {\n    \"a\": \"X\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["zz"]));
        assert_eq!(updated, text);
        assert_eq!(removed, 0);
    }

    #[test]
    fn remove_does_not_touch_matching_text_outside_span() {
        let text = "OTHER = {\n    \"c\": \"keep\",\n}\nSTRINGS = {\n    \"c\": \"drop\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["c"]));
        assert_eq!(removed, 1);
        assert!(updated.contains("\"c\": \"keep\""));
        assert!(!updated.contains("\"c\": \"drop\""));
    }

    #[test]
    fn remove_value_with_escaped_quote_consumes_whole_value() {
        let text = "STRINGS = {\n    \"a\": \"she said \\\"hi\\\", ok\",\n    \"b\": \"x\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["a"]));
        assert_eq!(updated, "STRINGS = {\n    \"b\": \"x\",\n}\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn remove_key_requires_exact_identifier() {
        let text = "STRINGS = {\n    \"ab\": \"1\",\n    \"a\": \"2\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["a"]));
        assert_eq!(removed, 1);
        assert!(updated.contains("\"ab\": \"1\""));
        assert!(!updated.contains("\"a\": \"2\""));
    }

    #[test]
    fn remove_sole_entry_leaves_empty_literal() {
        let text = "STRINGS = {\n    \"a\": \"X\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["a"]));
        assert_eq!(updated, "STRINGS = {\n}\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn remove_last_entry_tolerates_dangling_comma() {
        let text = "STRINGS = {\n    \"a\": \"X\",\n    \"b\": \"Y\"\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (updated, removed) = remove_entries(text, span, &keys(&["b"]));
        // "a" keeps its comma even though it is now the last entry; the
        // host formats this tool targets accept trailing separators.
        assert_eq!(updated, "STRINGS = {\n    \"a\": \"X\",\n}\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn contains_entry_sees_existing_and_inserted_keys() {
        let text = "STRINGS = {\n    \"a\": \"X\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        assert!(contains_entry(text, span, "a"));
        assert!(!contains_entry(text, span, "b"));

        let updated = insert_entries(text, span, &entries(&[("b", "Y")]), "    ");
        let span = locate_literal(&updated, MARKER).expect("span after insert");
        assert!(contains_entry(&updated, span, "b"));
    }

    #[test]
    fn contains_entry_ignores_other_literals_and_partial_keys() {
        let text = "OTHER = {\n    \"b\": \"1\",\n}\nSTRINGS = {\n    \"ab\": \"2\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        assert!(!contains_entry(text, span, "b"));
        assert!(!contains_entry(text, span, "a"));
        assert!(contains_entry(text, span, "ab"));
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let text = "STRINGS = {\n    \"a\": \"Hello\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let inserted = insert_entries(text, span, &entries(&[("b", "World")]), "    ");

        let span = locate_literal(&inserted, MARKER).expect("span after insert");
        let (restored, removed) = remove_entries(&inserted, span, &keys(&["b"]));
        assert_eq!(restored, text);
        assert_eq!(removed, 1);
    }

    #[test]
    fn remove_twice_is_idempotent() {
        let text = "STRINGS = {\n    \"a\": \"X\",\n    \"c\": \"Y\",\n}\n";
        let span = locate_literal(text, MARKER).expect("span");
        let (once, removed_first) = remove_entries(text, span, &keys(&["c"]));
        assert_eq!(removed_first, 1);

        let span = locate_literal(&once, MARKER).expect("span after removal");
        let (twice, removed_second) = remove_entries(&once, span, &keys(&["c"]));
        assert_eq!(removed_second, 0);
        assert_eq!(twice, once);
    }
}
