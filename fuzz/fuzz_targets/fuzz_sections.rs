#![no_main]

use crop_advisor::advisory::parse_sections;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for section in parse_sections(text) {
            assert!(!section.content.is_empty());
        }
    }
});
