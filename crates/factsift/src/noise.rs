//! Boilerplate detection for extracted text fragments.

/// Phrases that mark a fragment as navigation, sharing, or ad chrome.
///
/// Matching is a plain substring test against already lower-cased text, so
/// every entry here must be lower-case.
pub const IRRELEVANT_PHRASES: &[&str] = &[
    "share this property",
    "more cities",
    "view more",
    "show map",
    "advertise",
    "get alerts",
    "currency:",
    "copy link",
    "facebook",
    "twitter",
    "whatsapp",
    "pinterest",
    "linkedin",
];

/// Returns `true` if `text` contains any of [`IRRELEVANT_PHRASES`].
pub fn is_irrelevant(text: &str) -> bool {
    IRRELEVANT_PHRASES.iter().any(|phrase| text.contains(phrase))
}
