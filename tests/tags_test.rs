use aws_request_metrics::tags::{ERROR_TAGS, SUCCESS_TAGS, TagExtractor, endpoint_host, is_error};
use aws_request_metrics::{BaseTags, ErrorValue, Field, MeasurementBag, PropertyValue, RequestMetrics};

#[derive(Debug, thiserror::Error)]
#[error("access denied")]
struct AccessDeniedException;

#[test]
fn base_tags_always_have_request_type_and_error() {
    let tags = BaseTags::assemble("GetItemRequest", &RequestMetrics::new());
    assert_eq!(tags.get("requestType"), Some("GetItemRequest"));
    assert_eq!(tags.get("error"), Some("false"));
    assert!(!tags.is_error());
}

#[test]
fn missing_success_tags_default_to_unknown() {
    let tags = BaseTags::assemble("GetItemRequest", &RequestMetrics::new());
    assert_eq!(tags.len(), 5);
    for key in ["serviceEndpoint", "serviceName", "statusCode"] {
        assert_eq!(tags.get(key), Some("UNKNOWN"), "{key}");
    }
    assert!(!tags.contains_key("AWSErrorCode"));
    assert!(!tags.contains_key("exception"));
}

#[test]
fn malformed_endpoint_defaults_to_unknown() {
    let mut metrics = RequestMetrics::new();
    metrics.add_property(Field::ServiceEndpoint, "not a uri");
    let tags = BaseTags::assemble("GetItemRequest", &metrics);
    assert_eq!(tags.get("serviceEndpoint"), Some("UNKNOWN"));
}

#[test]
fn only_first_property_value_is_used() {
    let mut metrics = RequestMetrics::new();
    metrics
        .add_property(Field::ServiceEndpoint, "https://sqs.eu-west-1.amazonaws.com")
        .add_property(Field::ServiceEndpoint, "https://other.example.com")
        .add_property(Field::StatusCode, 500u16)
        .add_property(Field::StatusCode, 200u16);
    let tags = BaseTags::assemble("SendMessageRequest", &metrics);
    assert_eq!(tags.get("serviceEndpoint"), Some("sqs.eu-west-1.amazonaws.com"));
    assert_eq!(tags.get("statusCode"), Some("500"));
}

#[test]
fn error_code_alone_marks_error() {
    let mut metrics = RequestMetrics::new();
    metrics.add_property(Field::AWSErrorCode, "AccessDenied");
    assert!(is_error(&metrics));

    let tags = BaseTags::assemble("GetItemRequest", &metrics);
    assert!(tags.is_error());
    assert_eq!(tags.get("AWSErrorCode"), Some("AccessDenied"));
    assert_eq!(tags.get("exception"), Some("UNKNOWN"));
    assert_eq!(tags.len(), 7);
}

#[test]
fn exception_tag_is_simple_type_name() {
    let mut metrics = RequestMetrics::new();
    metrics
        .add_property(Field::AWSErrorCode, "AccessDenied")
        .add_property(Field::Exception, ErrorValue::from_error(&AccessDeniedException));
    let tags = BaseTags::assemble("GetItemRequest", &metrics);
    assert_eq!(tags.get("exception"), Some("AccessDeniedException"));
}

#[test]
fn empty_error_list_is_not_an_error() {
    struct EmptyLists;
    impl MeasurementBag for EmptyLists {
        fn counter(&self, _name: &str) -> Option<i64> {
            None
        }
        fn last_timing(&self, _name: &str) -> Option<aws_request_metrics::TimingInterval> {
            None
        }
        fn property_list(&self, _name: &str) -> Option<&[PropertyValue]> {
            Some(&[])
        }
    }
    assert!(!is_error(&EmptyLists));
    let tags = BaseTags::assemble("R", &EmptyLists);
    assert_eq!(tags.get("serviceName"), Some("UNKNOWN"));
}

#[test]
fn extractors() {
    let endpoint = PropertyValue::from("https://s3.amazonaws.com/bucket");
    assert_eq!(TagExtractor::Host.extract(&endpoint).unwrap(), "s3.amazonaws.com");
    assert_eq!(
        TagExtractor::Display.extract(&endpoint).unwrap(),
        "https://s3.amazonaws.com/bucket"
    );
    assert_eq!(TagExtractor::SimpleTypeName.extract(&endpoint).unwrap(), "String");
    assert!(TagExtractor::Host.extract(&PropertyValue::Integer(3)).is_err());
    assert!(endpoint_host("").is_err());
}

#[test]
fn declared_tables() {
    assert_eq!(SUCCESS_TAGS.len(), 3);
    assert_eq!(ERROR_TAGS.len(), 2);
    assert_eq!(ERROR_TAGS[1].field, Field::Exception);
    assert_eq!(ERROR_TAGS[1].extractor, TagExtractor::SimpleTypeName);
}
