//! SDK request measurement fields.
//!
//! These are the keys the SDK's HTTP client uses when populating a
//! request's [`MeasurementBag`](crate::MeasurementBag). Only a subset is
//! turned into metrics; see [`COUNTERS`], [`TIMERS`] and the tag tables in
//! [`crate::tags`].

use std::fmt;

/// A named measurement recorded by the SDK for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Properties
    AWSErrorCode,
    AWSRequestID,
    Exception,
    ThrottleException,
    RedirectLocation,
    ServiceEndpoint,
    ServiceName,
    StatusCode,

    // Counters
    BytesProcessed,
    HttpClientRetryCount,
    RequestCount,
    RetryCount,
    RetryCapacityConsumed,
    ThrottledRetryCount,
    HttpClientPoolAvailableCount,
    HttpClientPoolLeasedCount,
    HttpClientPoolPendingCount,

    // Timers
    ClientExecuteTime,
    CredentialsRequestTime,
    HttpClientReceiveResponseTime,
    HttpClientSendRequestTime,
    HttpRequestTime,
    HttpSocketReadTime,
    RequestMarshallTime,
    RequestSigningTime,
    ResponseProcessingTime,
    RetryPauseTime,
}

impl Field {
    /// Raw name used as the key in the measurement bag.
    pub fn name(self) -> &'static str {
        match self {
            Field::AWSErrorCode => "AWSErrorCode",
            Field::AWSRequestID => "AWSRequestID",
            Field::Exception => "Exception",
            Field::ThrottleException => "ThrottleException",
            Field::RedirectLocation => "RedirectLocation",
            Field::ServiceEndpoint => "ServiceEndpoint",
            Field::ServiceName => "ServiceName",
            Field::StatusCode => "StatusCode",
            Field::BytesProcessed => "BytesProcessed",
            Field::HttpClientRetryCount => "HttpClientRetryCount",
            Field::RequestCount => "RequestCount",
            Field::RetryCount => "RetryCount",
            Field::RetryCapacityConsumed => "RetryCapacityConsumed",
            Field::ThrottledRetryCount => "ThrottledRetryCount",
            Field::HttpClientPoolAvailableCount => "HttpClientPoolAvailableCount",
            Field::HttpClientPoolLeasedCount => "HttpClientPoolLeasedCount",
            Field::HttpClientPoolPendingCount => "HttpClientPoolPendingCount",
            Field::ClientExecuteTime => "ClientExecuteTime",
            Field::CredentialsRequestTime => "CredentialsRequestTime",
            Field::HttpClientReceiveResponseTime => "HttpClientReceiveResponseTime",
            Field::HttpClientSendRequestTime => "HttpClientSendRequestTime",
            Field::HttpRequestTime => "HttpRequestTime",
            Field::HttpSocketReadTime => "HttpSocketReadTime",
            Field::RequestMarshallTime => "RequestMarshallTime",
            Field::RequestSigningTime => "RequestSigningTime",
            Field::ResponseProcessingTime => "ResponseProcessingTime",
            Field::RetryPauseTime => "RetryPauseTime",
        }
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counter fields emitted as `aws.request.<field>` counters.
pub const COUNTERS: &[Field] = &[
    Field::BytesProcessed,
    Field::HttpClientRetryCount,
    Field::RequestCount,
];

/// Timer fields emitted as `aws.request.<field>` timers.
pub const TIMERS: &[Field] = &[
    Field::ClientExecuteTime,
    Field::CredentialsRequestTime,
    Field::HttpClientReceiveResponseTime,
    Field::HttpClientSendRequestTime,
    Field::HttpRequestTime,
    Field::RequestMarshallTime,
    Field::RequestSigningTime,
    Field::ResponseProcessingTime,
    Field::RetryPauseTime,
];
