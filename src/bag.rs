//! Per-request measurement bags.
//!
//! The SDK's HTTP client records counters, timing intervals and property
//! lists against a request as it executes. The collector reads them through
//! the [`MeasurementBag`] trait exactly once, after the request/response
//! cycle completes, and never mutates them.
//!
//! [`RequestMetrics`] is the in-memory bag the client populates.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::naming;

/// Read-only view of the measurements recorded for one request.
pub trait MeasurementBag {
    /// Value of a named counter, if it was ever set.
    fn counter(&self, name: &str) -> Option<i64>;

    /// The most recent timing interval recorded under `name`.
    fn last_timing(&self, name: &str) -> Option<TimingInterval>;

    /// All values recorded under a named property, in insertion order.
    fn property_list(&self, name: &str) -> Option<&[PropertyValue]>;
}

/// A timed sub-measurement, in nanoseconds on the client's monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingInterval {
    pub start_nanos: u64,
    /// `None` while the interval is still open.
    pub end_nanos: Option<u64>,
}

impl TimingInterval {
    /// An interval that has started but not finished.
    pub fn open(start_nanos: u64) -> Self {
        Self {
            start_nanos,
            end_nanos: None,
        }
    }

    /// A finished interval.
    pub fn closed(start_nanos: u64, end_nanos: u64) -> Self {
        Self {
            start_nanos,
            end_nanos: Some(end_nanos),
        }
    }

    pub fn is_end_time_known(&self) -> bool {
        self.end_nanos.is_some()
    }

    /// Elapsed nanoseconds, or `None` if the interval is still open.
    ///
    /// An end before the start (clock skew) yields zero.
    pub fn elapsed_nanos(&self) -> Option<u64> {
        self.end_nanos
            .map(|end| end.saturating_sub(self.start_nanos))
    }
}

/// An error captured as a request property.
///
/// Only the type name and message are kept; the collector uses the type
/// name as a tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    type_name: String,
    message: String,
}

impl ErrorValue {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Capture an error value, naming it by its simple Rust type name.
    pub fn from_error<E: std::error::Error + 'static>(err: &E) -> Self {
        Self::new(naming::simple_type_name::<E>(), err.to_string())
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)
    }
}

/// A single value in a property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Error(ErrorValue),
}

impl PropertyValue {
    /// Unqualified type name of the value.
    pub fn simple_type_name(&self) -> &str {
        match self {
            PropertyValue::Text(_) => "String",
            PropertyValue::Integer(_) => "i64",
            PropertyValue::Error(e) => e.type_name(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Integer(n) => write!(f, "{n}"),
            PropertyValue::Error(e) => write!(f, "{e}"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Integer(n)
    }
}

impl From<u16> for PropertyValue {
    fn from(n: u16) -> Self {
        PropertyValue::Integer(i64::from(n))
    }
}

impl From<ErrorValue> for PropertyValue {
    fn from(e: ErrorValue) -> Self {
        PropertyValue::Error(e)
    }
}

/// In-memory measurement bag populated by the client for one request.
///
/// Names are accepted as anything string-like, so [`Field`](crate::Field)
/// values can be passed directly:
///
/// ```rust
/// # use aws_request_metrics::{Field, MeasurementBag, RequestMetrics};
/// let mut metrics = RequestMetrics::new();
/// metrics
///     .set_counter(Field::RequestCount, 1)
///     .add_property(Field::ServiceName, "s3");
/// assert_eq!(metrics.counter("RequestCount"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct RequestMetrics {
    enabled: bool,
    counters: HashMap<String, i64>,
    timings: HashMap<String, Vec<TimingInterval>>,
    properties: HashMap<String, Vec<PropertyValue>>,
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self {
            enabled: true,
            counters: HashMap::new(),
            timings: HashMap::new(),
            properties: HashMap::new(),
        }
    }
}

impl RequestMetrics {
    /// Create an empty, enabled bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bag with collection switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Overwrite a counter.
    pub fn set_counter(&mut self, name: impl AsRef<str>, value: i64) -> &mut Self {
        self.counters.insert(name.as_ref().to_string(), value);
        self
    }

    /// Add to a counter, starting from zero if unset.
    pub fn increment_counter(&mut self, name: impl AsRef<str>, delta: i64) -> &mut Self {
        let counter = self.counters.entry(name.as_ref().to_string()).or_insert(0);
        *counter = counter.saturating_add(delta);
        self
    }

    /// Open a new timing interval.
    pub fn start_event(&mut self, name: impl AsRef<str>, start_nanos: u64) -> &mut Self {
        self.add_timing(name, TimingInterval::open(start_nanos))
    }

    /// Close the most recent open interval for `name`.
    ///
    /// Ignored if there is no open interval.
    pub fn end_event(&mut self, name: impl AsRef<str>, end_nanos: u64) -> &mut Self {
        let name = name.as_ref();
        let open = self
            .timings
            .get_mut(name)
            .and_then(|intervals| intervals.iter_mut().rev().find(|t| t.end_nanos.is_none()));
        match open {
            Some(interval) => interval.end_nanos = Some(end_nanos),
            None => trace!(event = name, "end_event without a matching start_event"),
        }
        self
    }

    /// Append a timing interval as-is.
    pub fn add_timing(&mut self, name: impl AsRef<str>, interval: TimingInterval) -> &mut Self {
        self.timings
            .entry(name.as_ref().to_string())
            .or_default()
            .push(interval);
        self
    }

    /// Append a value to a property list.
    pub fn add_property(
        &mut self,
        name: impl AsRef<str>,
        value: impl Into<PropertyValue>,
    ) -> &mut Self {
        self.properties
            .entry(name.as_ref().to_string())
            .or_default()
            .push(value.into());
        self
    }
}

impl MeasurementBag for RequestMetrics {
    fn counter(&self, name: &str) -> Option<i64> {
        self.counters.get(name).copied()
    }

    fn last_timing(&self, name: &str) -> Option<TimingInterval> {
        self.timings.get(name).and_then(|t| t.last()).copied()
    }

    fn property_list(&self, name: &str) -> Option<&[PropertyValue]> {
        self.properties.get(name).map(Vec::as_slice)
    }
}
