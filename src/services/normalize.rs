//! Text canonicalization shared by every matcher.
//!
//! German umlauts are folded to their two-letter spellings before the
//! Unicode pass, so "Rotkäppchen" and "Rotkaeppchen" meet at the same key.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Replace umlauts and sharp s with ASCII digraphs.
pub fn to_ascii_digraphs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            'ẞ' => out.push_str("SS"),
            _ => out.push(ch),
        }
    }
    out
}

/// Canonicalize text to lowercase ASCII words separated by single spaces.
///
/// Never fails; empty or symbol-only input yields an empty string. The
/// output is a fixed point: normalizing it again returns it unchanged.
pub fn normalize(text: &str) -> String {
    let lowered = to_ascii_digraphs(text).to_lowercase();

    let stripped: String = lowered
        .trim()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize while keeping list separators (`,` `;` `+`) as a literal `,`.
///
/// Each separated segment is normalized on its own and the segments are
/// rejoined with `" , "`, so the result still splits cleanly on commas.
pub fn normalize_list(text: &str) -> String {
    text.split(|c| matches!(c, ',' | ';' | '+'))
        .map(normalize)
        .collect::<Vec<_>>()
        .join(" , ")
}
