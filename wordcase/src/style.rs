use std::{fmt, str::FromStr};

use crate::Error;

/// The word-case styles this crate converts to.
///
/// A `Case` can be parsed from loose spellings of its name (`"camelCase"`, `"camel_case"` and
/// `"camel"` all work), so it can be read straight from configuration:
///
/// ```
/// use wordcase::Case;
///
/// let case: Case = "dollarCamelCase".parse().unwrap();
/// assert_eq!(case, Case::DollarCamel);
/// assert_eq!(case.name(), "dollar-camel");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Case {
    /// `userIdV2`
    Camel,
    /// `user-id-v2`
    Kebab,
    /// `user_id_v2`
    Snake,
    /// camelCase split on `$`, with digits and symbols dropped: `userIdV`
    DollarCamel,
    /// `user.id.v2`
    Dot,
}

impl Case {
    /// All styles, in declaration order.
    pub const ALL: [Case; 5] = [
        Self::Camel,
        Self::Kebab,
        Self::Snake,
        Self::DollarCamel,
        Self::Dot,
    ];

    /// The canonical name of the style.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
            Self::DollarCamel => "dollar-camel",
            Self::Dot => "dot",
        }
    }

    /// The conversion rules for this style.
    pub(crate) const fn style(self) -> &'static CaseStyle {
        match self {
            Self::Camel => &CaseStyle::CAMEL,
            Self::Kebab => &CaseStyle::KEBAB,
            Self::Snake => &CaseStyle::SNAKE,
            Self::DollarCamel => &CaseStyle::DOLLAR_CAMEL,
            Self::Dot => &CaseStyle::DOT,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = crate::run(&s.into(), Self::Kebab);
        let key = key.strip_suffix("-case").unwrap_or(&key);

        Self::ALL
            .into_iter()
            .find(|case| case.name() == key)
            .ok_or_else(|| Error::UnknownCase(s.to_owned()))
    }
}

impl TryFrom<String> for Case {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for Case {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// How normalized text is cut into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitPolicy {
    /// Split on runs of anything that isn't an ASCII letter or digit.
    AsciiAlphanumeric,
    /// Split on runs of anything that isn't a Unicode letter or digit.
    Alphanumeric,
    /// Split on the delimiter if the text contains it, otherwise on runs of non-letters.
    Delimiter(char),
}

/// How words are cased before and after joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordTransform {
    /// Lowercase every word.
    Lowercase,
    /// Lowercase the whole string once the words are joined.
    LowercaseJoined,
    /// Lowercase the first word, capitalize the first letter of the others.
    Camel,
}

/// The configuration record driving one converter through the shared pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CaseStyle {
    /// Separator inserted at `lowerUpper` and `digitUpper` transitions before splitting. `None`
    /// leaves camelCase runs in one piece.
    pub(crate) boundary: Option<char>,
    /// Word splitting rule.
    pub(crate) split: SplitPolicy,
    /// Per-word casing.
    pub(crate) transform: WordTransform,
    /// Character placed between words, if any.
    pub(crate) glue: Option<char>,
    /// Whether digits survive inside words. When false, every non-letter is stripped from each
    /// word after splitting.
    pub(crate) keep_digits: bool,
}

impl CaseStyle {
    /// Lower camelCase.
    pub(crate) const CAMEL: Self = Self {
        boundary: Some(' '),
        split: SplitPolicy::AsciiAlphanumeric,
        transform: WordTransform::Camel,
        glue: None,
        keep_digits: true,
    };

    /// kebab-case.
    pub(crate) const KEBAB: Self = Self {
        boundary: Some(' '),
        split: SplitPolicy::Alphanumeric,
        transform: WordTransform::Lowercase,
        glue: Some('-'),
        keep_digits: true,
    };

    /// snake_case.
    pub(crate) const SNAKE: Self = Self {
        boundary: Some('_'),
        split: SplitPolicy::AsciiAlphanumeric,
        transform: WordTransform::LowercaseJoined,
        glue: Some('_'),
        keep_digits: true,
    };

    /// camelCase split on `$`. Digits are dropped along with every other non-letter, and camel
    /// boundaries are not broken.
    pub(crate) const DOLLAR_CAMEL: Self = Self {
        boundary: None,
        split: SplitPolicy::Delimiter('$'),
        transform: WordTransform::Camel,
        glue: None,
        keep_digits: false,
    };

    /// dot.case.
    pub(crate) const DOT: Self = Self {
        boundary: Some('.'),
        split: SplitPolicy::Alphanumeric,
        transform: WordTransform::Lowercase,
        glue: Some('.'),
        keep_digits: true,
    };
}
