use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;

/// Names the unit variants of an enum in one of the `wordcase` styles.
///
/// Names are converted at compile time with `wordcase::convert`. The enum gets a `CASE_NAMES`
/// constant, a `case_name()` accessor, and `Display` and `FromStr` impls built on those names.
///
/// ```
/// use wordcase_derive::WordCase;
///
/// #[derive(Debug, PartialEq, WordCase)]
/// #[word_case(rename_all = "kebab")]
/// enum Column {
///     UserID,
///     CreatedAt,
///     #[word_case(rename = "v2")]
///     VersionTwo,
/// }
///
/// assert_eq!(Column::CASE_NAMES, ["user-id", "created-at", "v2"]);
/// assert_eq!(Column::UserID.to_string(), "user-id");
/// assert_eq!("created-at".parse::<Column>().unwrap(), Column::CreatedAt);
/// ```
#[proc_macro_derive(WordCase, attributes(word_case))]
pub fn word_case(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand::expand(&input)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}
