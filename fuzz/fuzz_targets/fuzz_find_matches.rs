#![no_main]
use libfuzzer_sys::fuzz_target;
use lostfound_matcher::{find_matches, Item};

/// Fuzz the full scoring path with arbitrary item text.
///
/// The input is split on `|` into item fields; every pool item reuses a
/// rotated slice of the fields so the corpus shares some vocabulary.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let fields: Vec<&str> = s.split('|').collect();
    let field = |i: usize| fields.get(i % fields.len()).copied().unwrap_or("");

    let query = Item::lost(0, field(0), field(1), field(2)).with_description(field(3));
    let pool: Vec<Item> = (0..fields.len().min(16))
        .map(|i| {
            Item::found(i as u64, field(i), field(i + 1), field(i + 2))
                .with_description(field(i + 3))
                .with_color(field(i + 4))
        })
        .collect();

    let matches = find_matches(&query, &pool, 5, 0.0);
    assert!(matches.len() <= 5);
    for pair in matches.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    for m in &matches {
        assert!((0.0..=100.0).contains(&m.confidence));
    }
});
