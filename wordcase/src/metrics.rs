//! Optional Prometheus counters for conversions. Enabled with the `metrics` feature.
//!
//! Nothing is recorded until [`install`] is called with a registry:
//!
//! ```
//! let registry = prometheus::Registry::new();
//! wordcase::metrics::install(&registry).unwrap();
//!
//! wordcase::to_kebab_case("userID");
//! assert_eq!(wordcase::metrics::installed().unwrap().conversions(wordcase::Case::Kebab), 1);
//! ```

use std::sync::OnceLock;

use prometheus::{IntCounter, IntCounterVec, Opts, Registry, core::Collector};

use crate::{Case, Error};

/// The label holding the case style name.
const CASE_LABEL: &str = "case";

static INSTALLED: OnceLock<ConversionMetrics> = OnceLock::new();

/// Conversion counters registered in a [`Registry`].
#[derive(Debug, Clone)]
pub struct ConversionMetrics {
    conversions: IntCounterVec,
    empty_results: IntCounterVec,
    normalization_fallbacks: IntCounter,
}

impl ConversionMetrics {
    /// Create the counters and register them with `registry`, replacing any that are already
    /// registered under the same names.
    pub fn new(registry: &Registry) -> Result<Self, Error> {
        let conversions = IntCounterVec::new(
            Opts::new(
                "wordcase_conversions_total",
                "The total number of conversions, by case style.",
            ),
            &[CASE_LABEL],
        )?;
        let empty_results = IntCounterVec::new(
            Opts::new(
                "wordcase_empty_results_total",
                "The number of conversions that produced an empty string, by case style.",
            ),
            &[CASE_LABEL],
        )?;
        let normalization_fallbacks = IntCounter::with_opts(Opts::new(
            "wordcase_normalization_fallbacks_total",
            "The number of inputs converted without unicode normalization.",
        ))?;

        register(registry, &conversions)?;
        register(registry, &empty_results)?;
        register(registry, &normalization_fallbacks)?;

        Ok(Self {
            conversions,
            empty_results,
            normalization_fallbacks,
        })
    }

    /// The number of conversions to `case`.
    pub fn conversions(&self, case: Case) -> u64 {
        self.conversions.with_label_values(&[case.name()]).get()
    }

    /// The number of conversions to `case` that returned `""`.
    pub fn empty_results(&self, case: Case) -> u64 {
        self.empty_results.with_label_values(&[case.name()]).get()
    }

    /// The number of inputs that skipped diacritic stripping.
    pub fn normalization_fallbacks(&self) -> u64 {
        self.normalization_fallbacks.get()
    }

    fn record(&self, case: Case, empty: bool) {
        self.conversions.with_label_values(&[case.name()]).inc();
        if empty {
            self.empty_results.with_label_values(&[case.name()]).inc();
        }
    }
}

/// Register `collector`, overwriting a previous registration with the same descriptors.
fn register<C: Collector + Clone + 'static>(
    registry: &Registry,
    collector: &C,
) -> Result<(), Error> {
    let boxed = Box::new(collector.clone());
    match registry.register(boxed.clone()) {
        Err(prometheus::Error::AlreadyReg) => {
            registry.unregister(boxed.clone())?;
            registry.register(boxed)?;
            Ok(())
        }
        result => Ok(result?),
    }
}

/// Install process-wide conversion metrics in `registry`. Can only be done once.
pub fn install(registry: &Registry) -> Result<(), Error> {
    if INSTALLED.get().is_some() {
        return Err(Error::MetricsAlreadyInstalled);
    }

    let metrics = ConversionMetrics::new(registry)?;
    INSTALLED
        .set(metrics)
        .map_err(|_| Error::MetricsAlreadyInstalled)?;

    tracing::debug!("installed conversion metrics");
    Ok(())
}

/// The installed metrics, if any.
pub fn installed() -> Option<&'static ConversionMetrics> {
    INSTALLED.get()
}

pub(crate) fn record_conversion(case: Case, empty: bool) {
    if let Some(metrics) = INSTALLED.get() {
        metrics.record(case, empty);
    }
}

pub(crate) fn record_normalization_fallback() {
    if let Some(metrics) = INSTALLED.get() {
        metrics.normalization_fallbacks.inc();
    }
}
