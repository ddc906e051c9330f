#![no_main]
use libfuzzer_sys::fuzz_target;
use lostfound_matcher::ItemSnapshot;

/// Fuzz snapshot decoding and repository construction.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(snapshot) = ItemSnapshot::from_json(s) {
            let _ = snapshot.into_repository();
        }
    }
});
