//! aws-request-metrics - AWS SDK request metrics for the `metrics` crate
//!
//! The SDK's HTTP client records a bag of counters, timing intervals and
//! properties against every request it sends. [`RequestMetricCollector`]
//! reads that bag once the request completes and emits a fixed set of
//! counters and timers, tagged with the service, endpoint host, status code,
//! request type and (on failure) error details.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use aws_request_metrics::{
//!     Field, RecorderRegistry, RequestMetricCollector, RequestMetrics, TimingInterval,
//! };
//!
//! struct PutItemRequest;
//!
//! let collector = RequestMetricCollector::new(Arc::new(RecorderRegistry));
//!
//! let mut metrics = RequestMetrics::new();
//! metrics
//!     .set_counter(Field::RequestCount, 1)
//!     .add_timing(Field::ClientExecuteTime, TimingInterval::closed(1_000, 51_000))
//!     .add_property(Field::ServiceName, "AmazonDynamoDBv2")
//!     .add_property(Field::ServiceEndpoint, "https://dynamodb.us-east-1.amazonaws.com")
//!     .add_property(Field::StatusCode, 200u16);
//!
//! // emits aws.request.requestCount and aws.request.clientExecuteTime
//! collector.collect(&PutItemRequest, &metrics);
//! ```
//!
//! Without a `metrics` recorder installed, all emission is a no-op.

pub mod bag;
mod collector;
pub mod config;
pub mod error;
pub mod field;
pub mod naming;
pub mod registry;
pub mod tags;
pub mod telemetry;

// Re-export main types at crate root
pub use bag::{ErrorValue, MeasurementBag, PropertyValue, RequestMetrics, TimingInterval};
pub use collector::RequestMetricCollector;
pub use config::CollectorConfig;
pub use error::{MetricsError, Result};
pub use field::Field;
pub use registry::{MetricId, RecorderRegistry, Registry};
pub use tags::BaseTags;
