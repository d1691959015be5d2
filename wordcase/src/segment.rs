use std::borrow::Cow;

use crate::style::{CaseStyle, SplitPolicy};

/// Splits normalized text into the non-empty words of a style, in order.
pub(crate) fn segment(text: &str, style: &CaseStyle) -> Vec<String> {
    let delimited = matches!(style.split, SplitPolicy::Delimiter(delimiter) if text.contains(delimiter));

    let text = match style.boundary {
        Some(separator) => Cow::Owned(insert_boundaries(text, separator)),
        None => Cow::Borrowed(text),
    };

    let pieces: Vec<&str> = match style.split {
        SplitPolicy::AsciiAlphanumeric => text.split(|c: char| !c.is_ascii_alphanumeric()).collect(),
        SplitPolicy::Alphanumeric => text.split(|c: char| !c.is_alphanumeric()).collect(),
        SplitPolicy::Delimiter(delimiter) if delimited => text.split(delimiter).collect(),
        SplitPolicy::Delimiter(_) => text.split(|c: char| !c.is_alphabetic()).collect(),
    };

    pieces
        .into_iter()
        .filter_map(|piece| {
            let word = if style.keep_digits {
                piece.to_owned()
            } else {
                piece.chars().filter(|c| c.is_alphabetic()).collect()
            };
            (!word.is_empty()).then_some(word)
        })
        .collect()
}

/// Inserts `separator` wherever an ASCII lowercase letter or digit is followed by an ASCII
/// uppercase letter, so `userID` becomes `user ID`.
fn insert_boundaries(text: &str, separator: char) -> String {
    let mut result =
        String::with_capacity(text.len() + text.chars().filter(char::is_ascii_uppercase).count());
    let mut prev_was_lower = false;

    for ch in text.chars() {
        if ch.is_ascii_uppercase() && prev_was_lower {
            result.push(separator);
        }
        result.push(ch);
        // Digits count as lowercase here: `v2Feature` splits before the `F`.
        prev_was_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }

    result
}
