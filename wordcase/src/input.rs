use std::borrow::Cow;

/// Any value a converter accepts.
///
/// Every variant except [`RawInput::Absent`] has a canonical string form (see
/// [`RawInput::coerce`]), which is what gets converted. Most callers never name this type and
/// pass a `&str`, a number or an `Option` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput<'a> {
    /// No value at all. Converts to `""` without running the pipeline.
    Absent,
    /// Text, borrowed or owned.
    Text(Cow<'a, str>),
    /// `true` or `false`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A list of values, rendered comma separated.
    List(Vec<RawInput<'a>>),
    /// A structured value with no textual form of its own.
    Object,
}

impl<'a> RawInput<'a> {
    /// The string form of an opaque object.
    pub const OBJECT_TEXT: &'static str = "[object Object]";

    /// Returns the canonical string form of the input, or `None` if it is absent.
    pub fn coerce(&self) -> Option<Cow<'_, str>> {
        let text = match self {
            Self::Absent => return None,
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
            Self::Int(value) => Cow::Owned(value.to_string()),
            Self::UInt(value) => Cow::Owned(value.to_string()),
            Self::Float(value) => Cow::Owned(format_float(*value)),
            Self::List(items) => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if let Some(text) = item.coerce() {
                        out.push_str(&text);
                    }
                }
                Cow::Owned(out)
            }
            Self::Object => Cow::Borrowed(Self::OBJECT_TEXT),
        };

        Some(text)
    }
}

/// Formats a float the way a dynamically typed runtime prints numbers: no trailing `.0` on
/// integral values, exponent form for very large and very small magnitudes.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    if value.fract() == 0.0 {
        integral_float(value)
    } else {
        value.to_string()
    }
}

/// Prints an integral float with its shortest round-trip digits, padded with zeros up to the
/// decimal point, so `2^60` prints as `1152921504606847000` rather than its exact binary value.
fn integral_float(value: f64) -> String {
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let width = exponent.parse::<usize>().unwrap_or(0) + 1;
    let digits = mantissa.replace('.', "");
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{sign}{digits:0<width$}")
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for RawInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for RawInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl From<char> for RawInput<'_> {
    fn from(value: char) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

impl From<bool> for RawInput<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<()> for RawInput<'_> {
    fn from(_: ()) -> Self {
        Self::Absent
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for RawInput<'_> {
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

impl From<f32> for RawInput<'_> {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for RawInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a, T: Into<RawInput<'a>>> From<Option<T>> for RawInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<'a, T: Into<RawInput<'a>>> From<Vec<T>> for RawInput<'a> {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for RawInput<'_> {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Absent,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(number) => json_number(&number),
            Value::String(text) => Self::Text(Cow::Owned(text)),
            Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
            Value::Object(_) => Self::Object,
        }
    }
}

impl<'a> From<&'a serde_json::Value> for RawInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Absent,
            Value::Bool(value) => Self::Bool(*value),
            Value::Number(number) => json_number(number),
            Value::String(text) => Self::Text(Cow::Borrowed(text)),
            Value::Array(items) => Self::List(items.iter().map(Into::into).collect()),
            Value::Object(_) => Self::Object,
        }
    }
}

fn json_number<'a>(number: &serde_json::Number) -> RawInput<'a> {
    if let Some(value) = number.as_i64() {
        RawInput::Int(value)
    } else if let Some(value) = number.as_u64() {
        RawInput::UInt(value)
    } else {
        number.as_f64().map_or(RawInput::Absent, RawInput::Float)
    }
}
