//! Request metric collector.
//!
//! Called by the SDK's HTTP client once per request, after the
//! request/response cycle completes (successfully or not). Each call:
//!
//! ```text
//!  measurement bag
//!        │
//!        ▼
//!  enabled? ── no ──► nothing emitted
//!        │ yes
//!        ▼
//!  base tags (success tags, + error tags if any error field present)
//!        │
//!        ├──► counters    aws.request.<field>   increment(value)  if value > 0
//!        ├──► timers      aws.request.<field>   record(end - start) if end known
//!        └──► throttling  aws.request.throttling increment(1) per throttle exception
//! ```
//!
//! Collection never fails: missing measurements are skipped or defaulted,
//! and tag extraction failures fall back to `"UNKNOWN"`.

use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use crate::bag::{MeasurementBag, RequestMetrics};
use crate::config::CollectorConfig;
use crate::field::{COUNTERS, Field, TIMERS};
use crate::naming::{metric_name_in, simple_type_name};
use crate::registry::{MetricId, RecorderRegistry, Registry};
use crate::tags::BaseTags;
use crate::telemetry::{TAG_THROTTLE_EXCEPTION, THROTTLING};
use crate::Result;

/// Turns per-request SDK measurements into registry updates.
///
/// Holds no per-request state and can be shared across threads.
///
/// ```rust
/// # use aws_request_metrics::{Field, RequestMetricCollector, RequestMetrics};
/// struct GetObjectRequest;
///
/// let collector = RequestMetricCollector::default();
/// let mut metrics = RequestMetrics::new();
/// metrics
///     .set_counter(Field::RequestCount, 1)
///     .add_property(Field::ServiceName, "s3");
/// collector.collect(&GetObjectRequest, &metrics);
/// ```
#[derive(Clone)]
pub struct RequestMetricCollector {
    registry: Arc<dyn Registry>,
    config: CollectorConfig,
}

impl Default for RequestMetricCollector {
    fn default() -> Self {
        Self::new(Arc::new(RecorderRegistry))
    }
}

impl std::fmt::Debug for RequestMetricCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestMetricCollector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RequestMetricCollector {
    /// Collector emitting into `registry` with default configuration.
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            config: CollectorConfig::default(),
        }
    }

    /// Collector with explicit configuration.
    pub fn with_config(registry: Arc<dyn Registry>, config: CollectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Collect using the bag's own enabled flag.
    pub fn collect<Q: ?Sized>(&self, request: &Q, metrics: &RequestMetrics) {
        self.process(request, metrics, metrics.is_enabled());
    }

    /// Emit the metrics for one request.
    ///
    /// `request` is the payload that was sent; only its type name is used,
    /// as the `requestType` tag.
    pub fn process<Q, B>(&self, _request: &Q, bag: &B, enabled: bool)
    where
        Q: ?Sized,
        B: MeasurementBag + ?Sized,
    {
        if !(enabled && self.config.enabled) {
            trace!("request metrics disabled, skipping");
            return;
        }

        let tags = BaseTags::assemble(simple_type_name::<Q>(), bag);

        for &field in COUNTERS {
            self.record_counter(field, bag, &tags);
        }

        for &field in TIMERS {
            self.record_timer(field, bag, &tags);
        }

        self.record_throttling(bag, &tags);
    }

    /// Metric name for a raw field name under the configured namespace.
    pub fn metric_name(&self, raw: &str) -> String {
        metric_name_in(&self.config.namespace, raw)
    }

    fn metric_id(&self, raw: &str, tags: &BaseTags) -> MetricId {
        MetricId::new(self.metric_name(raw), tags)
    }

    fn record_counter<B: MeasurementBag + ?Sized>(&self, field: Field, bag: &B, tags: &BaseTags) {
        match bag.counter(field.name()) {
            Some(value) if value > 0 => {
                // value > 0, so the cast is lossless
                self.registry
                    .counter(&self.metric_id(field.name(), tags))
                    .increment(value as u64);
            }
            Some(value) => trace!(%field, value, "skipping non-positive counter"),
            None => {}
        }
    }

    fn record_timer<B: MeasurementBag + ?Sized>(&self, field: Field, bag: &B, tags: &BaseTags) {
        let Some(interval) = bag.last_timing(field.name()) else {
            return;
        };
        let Some(nanos) = interval.elapsed_nanos() else {
            trace!(%field, "skipping timer with unknown end time");
            return;
        };
        self.registry
            .timer(&self.metric_id(field.name(), tags))
            .record(Duration::from_nanos(nanos));
    }

    fn record_throttling<B: MeasurementBag + ?Sized>(&self, bag: &B, tags: &BaseTags) {
        let Some(exceptions) = bag
            .property_list(Field::ThrottleException.name())
            .filter(|list| !list.is_empty())
        else {
            return;
        };
        let throttling = self.metric_id(THROTTLING, tags);
        for exception in exceptions {
            let id = throttling.with_tag(TAG_THROTTLE_EXCEPTION, exception.simple_type_name());
            self.registry.counter(&id).increment(1);
        }
    }
}
