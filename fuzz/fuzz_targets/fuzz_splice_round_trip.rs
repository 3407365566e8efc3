#![no_main]

use arbitrary::Arbitrary;
use langsync_core::{escape_value, insert_entries, locate_literal, remove_entries};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    keys: Vec<String>,
    values: Vec<String>,
}

fuzz_target!(|input: Input| {
    // Keys must look like identifiers or the removal pattern is allowed
    // to miss; constrain rather than discard.
    let keys: Vec<String> = input
        .keys
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, k)| {
            let cleaned: String = k.chars().filter(char::is_ascii_alphanumeric).take(12).collect();
            format!("k{i}{cleaned}")
        })
        .collect();
    if keys.is_empty() {
        return;
    }

    let entries: Vec<(String, String)> = keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let value = input.values.get(i).cloned().unwrap_or_default();
            (key.clone(), value)
        })
        .collect();

    let original = "STRINGS = {\n    \"seed\": \"kept\",\n}\n";
    let span = locate_literal(original, "STRINGS = {").expect("seed literal is balanced");
    let inserted = insert_entries(original, span, &entries, "    ");

    // Every inserted value must survive escaping: the literal stays
    // balanced no matter what bytes the value carried.
    let span = locate_literal(&inserted, "STRINGS = {").expect("inserted literal stays balanced");

    let (restored, removed) = remove_entries(&inserted, span, &keys);
    assert_eq!(removed, keys.len(), "every inserted entry must be removable");
    assert_eq!(restored, original, "insert then remove must round-trip");

    // Escaping itself must be stable under the documented order.
    for (_, value) in &entries {
        let escaped = escape_value(value);
        assert!(!escaped.contains('\n'), "escaped value must be single-line");
    }
});
