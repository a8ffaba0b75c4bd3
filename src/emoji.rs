//! Emoji stripping for App Store Connect.
//!
//! The publishing platform rejects descriptions containing emoji, so
//! generated copy is filtered through a fixed set of Unicode blocks:
//! emoticons, pictographs, transport symbols, dingbats, flag sequences,
//! and the supplemental symbol blocks.

use regex::Regex;
use std::sync::LazyLock;

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        "\u{1F600}-\u{1F64F}", // emoticons
        "\u{1F300}-\u{1F5FF}", // symbols & pictographs
        "\u{1F680}-\u{1F6FF}", // transport & map symbols
        "\u{1F700}-\u{1F77F}", // alchemical symbols
        "\u{1F780}-\u{1F7FF}", // geometric shapes extended
        "\u{1F800}-\u{1F8FF}", // supplemental arrows-C
        "\u{1F900}-\u{1F9FF}", // supplemental symbols and pictographs
        "\u{1FA00}-\u{1FA6F}", // chess symbols
        "\u{1FA70}-\u{1FAFF}", // symbols and pictographs extended-A
        "\u{2702}-\u{27B0}",   // dingbats
        "\u{1F1E0}-\u{1F1FF}", // regional indicators (flags)
        "]+",
    ))
    .expect("static regex")
});

/// Remove every code point in the banned blocks.
///
/// Idempotent: stripping already-stripped text is a no-op.
pub fn strip_emoji(text: &str) -> String {
    EMOJI.replace_all(text, "").into_owned()
}
