#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // convert should never panic on arbitrary input
    let fm = kapitel::content::FrontMatter::for_chapter(1, "fuzz");
    let _ = kapitel::content::convert(data, &fm);
});
