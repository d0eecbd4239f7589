#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (text, query) = data;
    let spans = faqx::faq::highlight(text, query);

    // Concatenated segments must reproduce the input exactly
    let rejoined: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rejoined, text);
});
