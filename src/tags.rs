//! Tag tables and base tag assembly.
//!
//! Every metric emitted for a request carries the same [`BaseTags`]. They
//! are built from two declarative tables:
//!
//! - [`SUCCESS_TAGS`] — always present
//! - [`ERROR_TAGS`] — present only when any of them has a value
//!
//! Each declared tag reads the first value of its property list and runs it
//! through a [`TagExtractor`]. A declared tag with no usable value is still
//! emitted, with the value [`UNKNOWN`].

use std::collections::BTreeMap;
use std::collections::btree_map;

use tracing::debug;
use url::Url;

use crate::bag::{MeasurementBag, PropertyValue};
use crate::field::Field;
use crate::naming::decapitalize;
use crate::telemetry::{TAG_ERROR, TAG_REQUEST_TYPE, UNKNOWN};
use crate::{MetricsError, Result};

/// How a raw property value becomes a tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagExtractor {
    /// The value's display form.
    Display,
    /// The host component of an endpoint URI.
    Host,
    /// The value's simple type name.
    SimpleTypeName,
}

impl TagExtractor {
    pub fn extract(self, value: &PropertyValue) -> Result<String> {
        match self {
            TagExtractor::Display => Ok(value.to_string()),
            TagExtractor::Host => endpoint_host(&value.to_string()),
            TagExtractor::SimpleTypeName => Ok(value.simple_type_name().to_string()),
        }
    }
}

/// Host of an endpoint URI.
///
/// Values without a scheme (`s3.amazonaws.com`) don't parse as absolute
/// URIs and are rejected.
pub fn endpoint_host(endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint).map_err(|e| MetricsError::InvalidEndpoint {
        value: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(MetricsError::MissingHost(endpoint.to_string())),
    }
}

/// A declared tag: which field it reads and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagField {
    pub field: Field,
    pub extractor: TagExtractor,
}

impl TagField {
    pub const fn new(field: Field) -> Self {
        Self::with_extractor(field, TagExtractor::Display)
    }

    pub const fn with_extractor(field: Field, extractor: TagExtractor) -> Self {
        Self { field, extractor }
    }

    /// Tag key, the decapitalized field name.
    pub fn key(&self) -> String {
        decapitalize(self.field.name()).into_owned()
    }

    /// Extracted value of the first entry in the field's property list.
    ///
    /// `None` when the list is missing or empty. A failed transform is
    /// logged and resolved to the sentinel.
    pub fn value<B: MeasurementBag + ?Sized>(&self, bag: &B) -> Option<String> {
        let first = bag.property_list(self.field.name())?.first()?;
        match self.extractor.extract(first) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(field = %self.field, value = %first, error = %e, "failed to extract tag value");
                Some(UNKNOWN.to_string())
            }
        }
    }
}

/// Tags attached to every successful or failed request.
pub const SUCCESS_TAGS: &[TagField] = &[
    TagField::with_extractor(Field::ServiceEndpoint, TagExtractor::Host),
    TagField::new(Field::ServiceName),
    TagField::new(Field::StatusCode),
];

/// Tags attached only when the request failed.
pub const ERROR_TAGS: &[TagField] = &[
    TagField::new(Field::AWSErrorCode),
    TagField::with_extractor(Field::Exception, TagExtractor::SimpleTypeName),
];

/// Whether any error field carries a value.
///
/// Presence is the signal; the value itself is not inspected.
pub fn is_error<B: MeasurementBag + ?Sized>(bag: &B) -> bool {
    ERROR_TAGS
        .iter()
        .any(|tag| tag.value(bag).is_some())
}

/// Immutable tag set shared by every metric emitted for one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseTags(BTreeMap<String, String>);

impl BaseTags {
    /// Build the base tags for a request.
    pub fn assemble<B: MeasurementBag + ?Sized>(request_type: &str, bag: &B) -> Self {
        let mut tags = BTreeMap::new();
        insert_declared(&mut tags, SUCCESS_TAGS, bag);
        tags.insert(TAG_REQUEST_TYPE.to_string(), request_type.to_string());
        let error = is_error(bag);
        if error {
            insert_declared(&mut tags, ERROR_TAGS, bag);
        }
        tags.insert(TAG_ERROR.to_string(), error.to_string());
        Self(tags)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_error(&self) -> bool {
        self.get(TAG_ERROR) == Some("true")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl<'a> IntoIterator for &'a BaseTags {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert_declared<B: MeasurementBag + ?Sized>(
    tags: &mut BTreeMap<String, String>,
    declared: &[TagField],
    bag: &B,
) {
    for tag in declared {
        let value = tag.value(bag).unwrap_or_else(|| UNKNOWN.to_string());
        tags.insert(tag.key(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_from_endpoint() {
        assert_eq!(
            endpoint_host("https://s3.amazonaws.com").unwrap(),
            "s3.amazonaws.com"
        );
        assert_eq!(
            endpoint_host("https://dynamodb.us-east-1.amazonaws.com:443/path").unwrap(),
            "dynamodb.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn host_rejects_relative_and_malformed() {
        assert!(matches!(
            endpoint_host("s3.amazonaws.com"),
            Err(MetricsError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            endpoint_host("http://[::1"),
            Err(MetricsError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            endpoint_host("mailto:ops@example.com"),
            Err(MetricsError::MissingHost(_))
        ));
    }

    #[test]
    fn tag_keys_are_decapitalized() {
        let keys: Vec<String> = SUCCESS_TAGS.iter().map(TagField::key).collect();
        assert_eq!(keys, ["serviceEndpoint", "serviceName", "statusCode"]);
        let keys: Vec<String> = ERROR_TAGS.iter().map(TagField::key).collect();
        assert_eq!(keys, ["AWSErrorCode", "exception"]);
    }
}
