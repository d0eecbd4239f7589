#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary answers must never panic; malformed markup renders literally
    let segments = faqx::faq::parse_answer_markup(data);
    assert!(!segments.is_empty());
});
