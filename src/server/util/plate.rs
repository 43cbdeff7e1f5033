//! Licence plate normalization.
//!
//! OCR output is noisy: separators, stray punctuation and surrounding text all show
//! up in the recognized strings. [`extract_plate`] turns one raw string into the
//! canonical registry form, preferring the two national plate layouts (`ABC123`
//! for cars, `ABC12D` for motorcycles) and falling back to a truncated
//! alphanumeric run when neither layout is found.

use std::sync::LazyLock;

use regex::Regex;

const FALLBACK_MIN_LEN: usize = 5;
const FALLBACK_MAX_LEN: usize = 7;

static PLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z]{3}[0-9]{3}|[A-Z]{3}[0-9]{2}[A-Z]").expect("Invalid plate regex")
});

/// Extracts a plate from one piece of recognized text.
///
/// # Returns
/// - `Some(plate)` - First match of a known layout, or the first seven characters of
///   the alphanumeric remainder when it is at least five characters long
/// - `None` - Nothing in the text resembles a plate
pub fn extract_plate(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | ':'))
        .collect();

    if let Some(found) = PLATE_PATTERN.find(&cleaned) {
        return Some(found.as_str().to_string());
    }

    let alphanumeric: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    if alphanumeric.len() >= FALLBACK_MIN_LEN {
        Some(alphanumeric.chars().take(FALLBACK_MAX_LEN).collect())
    } else {
        None
    }
}

/// Returns the plate from the first candidate that yields one.
pub fn extract_from_candidates<S: AsRef<str>>(candidates: &[S]) -> Option<String> {
    candidates
        .iter()
        .find_map(|candidate| extract_plate(candidate.as_ref()))
}

/// Canonical form of a plate typed into the registry: trimmed, uppercase, without
/// spaces, hyphens or dots.
pub fn normalize_registered_plate(plate: &str) -> String {
    plate
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect()
}

/// Whether a registered plate can ever come back out of [`extract_plate`].
///
/// A plate that fails this check would never match an OCR read, e.g. `ABC1234`
/// reads as `ABC123`.
pub fn is_recognizable_plate(plate: &str) -> bool {
    extract_plate(plate).as_deref() == Some(plate)
}
