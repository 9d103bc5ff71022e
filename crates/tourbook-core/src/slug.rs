//! Location slug helpers.
//!
//! Slugs come from the source as `city-country` with `_` standing in for
//! spaces, e.g. `"san_francisco-usa"`.

/// Separator between the place and the region/country in a slug.
const SEGMENT_SEPARATOR: char = '-';

/// Format a raw slug for display.
///
/// `_` becomes a space, `-` becomes `", "`, and every word of every
/// segment is title-cased, so `"san_francisco-usa"` reads
/// `"San Francisco, Usa"`. Differently-cased slugs format identically,
/// which makes the result usable as a grouping key.
#[must_use]
pub fn format_location(slug: &str) -> String {
    slug.split(SEGMENT_SEPARATOR)
        .map(|segment| title_case(&segment.replace('_', " ")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The country part of a slug: whatever follows the last `-`.
///
/// A slug without a separator is its own country.
#[must_use]
pub fn country_of(slug: &str) -> &str {
    slug.rsplit(SEGMENT_SEPARATOR).next().unwrap_or(slug)
}

fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut at_word_start = true;
    for ch in segment.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = !ch.is_alphanumeric();
    }
    out
}
