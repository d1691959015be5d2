//! Convert arbitrary values to standard word-case formats.
//!
//! Every converter runs the same pipeline:
//! 1. **Normalize**: coerce the input to text, trim it and strip diacritics.
//! 2. **Segment**: break camel boundaries (`userID` → `user ID`) and split into words.
//!    [`dollar_camel_case`] leaves camelCase runs whole.
//! 3. **Assemble**: case the words and join them with the style's glue.
//!
//! The five converters only differ in the style rules they feed to the last two stages:
//! - [`to_camel_case`]: `userIdV2`
//! - [`to_kebab_case`]: `user-id-v2`
//! - [`to_snake_case`]: `user_id_v2`
//! - [`dollar_camel_case`]: camelCase split on `$`, dropping digits and symbols
//! - [`to_dot_case`]: `user.id.v2`
//!
//! Converters are total. Absent input (`None`, `()`, JSON `null`) and input without any word
//! characters both produce `""`.
//!
//! ```
//! assert_eq!(wordcase::to_camel_case("User_ID"), "userId");
//! assert_eq!(wordcase::to_kebab_case("Ångström"), "angstrom");
//! assert_eq!(wordcase::to_snake_case(None::<&str>), "");
//! assert_eq!(wordcase::to_dot_case(42), "42");
//! ```

mod assemble;
mod error;
mod input;
mod normalize;
mod segment;
mod style;

#[cfg(feature = "metrics")]
pub mod metrics;

pub use error::Error;
pub use input::RawInput;
pub use normalize::{NormalizeError, strip_diacritics};
pub use style::Case;

/// Convert `input` to the given case.
pub fn convert<'a>(input: impl Into<RawInput<'a>>, case: Case) -> String {
    let output = run(&input.into(), case);

    #[cfg(feature = "metrics")]
    metrics::record_conversion(case, output.is_empty());

    output
}

pub(crate) fn run(input: &RawInput<'_>, case: Case) -> String {
    let Some(text) = input.coerce() else {
        return String::new();
    };
    let Some(text) = normalize::normalize(&text) else {
        return String::new();
    };

    let style = case.style();
    let words = segment::segment(&text, style);
    if words.is_empty() {
        tracing::trace!(%case, input = %text, "no words to convert");
        return String::new();
    }

    assemble::assemble(&words, style)
}

/// Convert to lower camelCase. Digits stay inside their words.
///
/// ```
/// use wordcase::to_camel_case;
///
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("v2_feature"), "v2Feature");
/// assert_eq!(to_camel_case("User_ID"), "userId");
/// ```
pub fn to_camel_case<'a>(input: impl Into<RawInput<'a>>) -> String {
    convert(input, Case::Camel)
}

/// Convert to kebab-case. Non-ASCII letters are kept as word characters.
///
/// ```
/// use wordcase::to_kebab_case;
///
/// assert_eq!(to_kebab_case("first name"), "first-name");
/// assert_eq!(to_kebab_case("make---this__snake.case"), "make-this-snake-case");
/// ```
pub fn to_kebab_case<'a>(input: impl Into<RawInput<'a>>) -> String {
    convert(input, Case::Kebab)
}

/// Convert to snake_case.
///
/// ```
/// use wordcase::to_snake_case;
///
/// assert_eq!(to_snake_case("v2Feature"), "v2_feature");
/// assert_eq!(to_snake_case("make---this__snake.case"), "make_this_snake_case");
/// ```
pub fn to_snake_case<'a>(input: impl Into<RawInput<'a>>) -> String {
    convert(input, Case::Snake)
}

/// Convert to camelCase using `$` as the word delimiter.
///
/// If the input contains a `$`, words are split on it and nothing else. Otherwise any run of
/// non-letters separates words. Either way, every digit and symbol is then removed from the
/// words. Camel boundaries are not broken, so existing camelCase input is lowercased into one
/// word. Use [`to_camel_case`] to keep digits and boundaries.
///
/// ```
/// use wordcase::dollar_camel_case;
///
/// assert_eq!(
///     dollar_camel_case("hEllo$tHis$is$a/!$example$1sentence"),
///     "helloThisIsAExampleSentence"
/// );
/// assert_eq!(dollar_camel_case("first name"), "firstName");
/// assert_eq!(dollar_camel_case("firstName"), "firstname");
/// assert_eq!(dollar_camel_case("v2_feature"), "vFeature");
/// ```
pub fn dollar_camel_case<'a>(input: impl Into<RawInput<'a>>) -> String {
    convert(input, Case::DollarCamel)
}

/// Convert to dot.case.
///
/// ```
/// use wordcase::to_dot_case;
///
/// assert_eq!(to_dot_case("userID"), "user.id");
/// assert_eq!(to_dot_case("Hello World"), "hello.world");
/// ```
pub fn to_dot_case<'a>(input: impl Into<RawInput<'a>>) -> String {
    convert(input, Case::Dot)
}
