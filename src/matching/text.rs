//! Text normalization and per-item feature text.

use crate::model::Item;

/// Number of times the category is repeated in the feature text.
///
/// Repetition doubles the category's term frequency in the vector space.
const CATEGORY_REPEAT: usize = 2;

/// Canonicalize free text for matching.
///
/// Lower-cases, removes everything outside `[a-z0-9]` and whitespace,
/// collapses whitespace runs to a single space and trims the ends.
#[must_use]
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an optional field; absent input yields an empty string.
#[must_use]
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Build the single normalized text blob used to vectorize an item.
///
/// Order: category (twice), name, description, color. Empty fields are
/// skipped entirely.
#[must_use]
pub fn build_feature_text(item: &Item) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(CATEGORY_REPEAT + 3);

    let category = normalize(&item.category);
    if !category.is_empty() {
        parts.extend(std::iter::repeat(category).take(CATEGORY_REPEAT));
    }

    for field in [
        normalize(&item.name),
        normalize(&item.description),
        normalize_opt(item.color.as_deref()),
    ] {
        if !field.is_empty() {
            parts.push(field);
        }
    }

    normalize(&parts.join(" "))
}
