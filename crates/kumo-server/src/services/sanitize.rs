//! ASCII Sanitizer
//!
//! Normalizes arbitrary text to printable ASCII so responses never mix
//! emoji or smart punctuation into plain-text consumers.

use unicode_normalization::UnicodeNormalization;

/// Smart punctuation replaced with ASCII equivalents before the lossy
/// normalization step would otherwise drop it.
const REPLACEMENTS: [(char, &str); 9] = [
    ('\u{2019}', "'"),   // right single quote (curly apostrophe)
    ('\u{2018}', "'"),   // left single quote
    ('\u{2014}', "-"),   // em dash
    ('\u{2013}', "-"),   // en dash
    ('\u{2012}', "-"),   // figure dash
    ('\u{2010}', "-"),   // hyphen
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2026}', "..."), // ellipsis
];

/// Text sanitizer with an optional trim post-step.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    trim_output: bool,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also trim leading/trailing whitespace after sanitizing.
    pub fn with_trim(mut self) -> Self {
        self.trim_output = true;
        self
    }

    /// Reduce `text` to pure ASCII: substitute smart punctuation, apply
    /// NFKD decomposition, then drop every remaining non-ASCII character.
    /// Total and idempotent.
    pub fn sanitize(&self, text: &str) -> String {
        let ascii = to_ascii(text);
        if self.trim_output {
            ascii.trim().to_string()
        } else {
            ascii
        }
    }
}

fn to_ascii(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    for ch in text.chars() {
        match REPLACEMENTS.iter().find(|(uni, _)| *uni == ch) {
            Some((_, ascii_eq)) => replaced.push_str(ascii_eq),
            None => replaced.push(ch),
        }
    }

    replaced.nfkd().filter(|c| c.is_ascii()).collect()
}
