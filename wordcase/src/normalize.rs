use std::borrow::Cow;

/// Reasons diacritics couldn't be stripped. Never surfaced by the converters, which fall back
/// to the unnormalized text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The crate was built without the `unicode` feature.
    #[error("unicode normalization is not available in this build")]
    Unsupported,
}

/// Trims the text and strips diacritics. Returns `None` if nothing but whitespace is left.
pub(crate) fn normalize(text: &str) -> Option<Cow<'_, str>> {
    let trimmed = text.trim_matches(is_trimmed);
    if trimmed.is_empty() {
        return None;
    }

    let normalized = match strip_diacritics(trimmed) {
        Ok(stripped) => stripped,
        Err(error) => {
            tracing::trace!(%error, "using unnormalized text");
            #[cfg(feature = "metrics")]
            crate::metrics::record_normalization_fallback();
            Cow::Borrowed(trimmed)
        }
    };

    Some(normalized)
}

/// Whitespace plus the byte order mark.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Applies NFKD and removes every combining mark, turning `Ångström` into `Angstrom`.
///
/// ```
/// assert_eq!(wordcase::strip_diacritics("Crème brûlée").unwrap(), "Creme brulee");
/// ```
#[cfg(feature = "unicode")]
pub fn strip_diacritics(text: &str) -> Result<Cow<'_, str>, NormalizeError> {
    use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

    if text.is_ascii() {
        return Ok(Cow::Borrowed(text));
    }

    Ok(Cow::Owned(
        text.nfkd().filter(|c| !is_combining_mark(*c)).collect(),
    ))
}

/// Always fails: this build has no normalization tables.
#[cfg(not(feature = "unicode"))]
pub fn strip_diacritics(_text: &str) -> Result<Cow<'_, str>, NormalizeError> {
    Err(NormalizeError::Unsupported)
}
