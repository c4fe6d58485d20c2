#![no_main]
use libfuzzer_sys::fuzz_target;
use ysuite::split_documents;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(docs) = split_documents(s) {
            if !s.is_empty() && docs.is_empty() {
                panic!("non-empty input produced no documents: {:?}", s);
            }
        }
    }
});
