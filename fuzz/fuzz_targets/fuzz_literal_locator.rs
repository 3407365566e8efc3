#![no_main]

use langsync_core::find_closing_brace;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // The scan must terminate and never panic for any input or start
    // offset, including offsets that are not char boundaries.
    for start in 0..=text.len().min(64) {
        let result = find_closing_brace(text, start);

        // Post-conditions when a close is found:
        if let Some(end) = result {
            assert!(end >= start, "close before start");
            assert!(end < text.len(), "close out of bounds");
            assert_eq!(&text[end..=end], "}", "result must be a closing brace");
        }
    }
});
