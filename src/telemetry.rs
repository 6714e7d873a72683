//! Metric and tag name constants.
//!
//! Every metric emitted by the collector is named `<namespace><field>`,
//! where the namespace defaults to [`NAMESPACE`] and the field is the
//! decapitalized SDK field name (see [`crate::naming`]).
//!
//! # Common tags
//!
//! - `serviceEndpoint` — host of the endpoint the request was sent to
//! - `serviceName` — SDK service name (e.g. "s3", "AmazonDynamoDBv2")
//! - `statusCode` — HTTP status code of the response
//! - `requestType` — simple type name of the request payload
//! - `error` — "true" | "false"
//! - `AWSErrorCode`, `exception` — only present when `error` is "true"

/// Default prefix for every metric name.
pub const NAMESPACE: &str = "aws.request.";

/// Raw name of the throttling counter, before normalization.
///
/// Tags: base tags plus [`TAG_THROTTLE_EXCEPTION`].
pub const THROTTLING: &str = "throttling";

/// Simple type name of the payload that was sent.
pub const TAG_REQUEST_TYPE: &str = "requestType";

/// Whether any error field was present on the request.
pub const TAG_ERROR: &str = "error";

/// Type of a single throttle exception, on the throttling counter only.
pub const TAG_THROTTLE_EXCEPTION: &str = "throttleException";

/// Sentinel for declared tags whose value is absent or unextractable.
pub const UNKNOWN: &str = "UNKNOWN";
