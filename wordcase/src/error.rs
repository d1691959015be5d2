/// Errors returned by the parsing and metrics surfaces of this crate.
///
/// The converters themselves never fail. They fall back to the unnormalized text or to an empty
/// string instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A case style name that doesn't match any [`Case`](crate::Case).
    #[error("unknown case style '{0}'. Use camel, kebab, snake, dollar-camel or dot")]
    UnknownCase(String),

    /// A name that doesn't match any variant of a `#[derive(WordCase)]` enum.
    #[error("'{name}' is not a valid {type_name} name")]
    UnknownName {
        /// The enum being parsed.
        type_name: &'static str,
        /// The rejected input.
        name: String,
    },

    /// Registering the conversion metrics failed.
    #[cfg(feature = "metrics")]
    #[error("failed to register conversion metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    /// [`metrics::install`](crate::metrics::install) was called more than once.
    #[cfg(feature = "metrics")]
    #[error("conversion metrics are already installed")]
    MetricsAlreadyInstalled,
}
