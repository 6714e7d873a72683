use std::sync::Arc;

use aws_request_metrics::{CollectorConfig, MetricsError, RecorderRegistry, RequestMetricCollector, Result};

#[test]
fn test_error_display() {
    let err = MetricsError::MissingHost("mailto:ops@example.com".to_string());
    assert!(err.to_string().contains("mailto:ops@example.com"));

    let err = MetricsError::InvalidEndpoint {
        value: "s3".into(),
        reason: "relative URL without a base".into(),
    };
    assert!(err.to_string().contains("invalid endpoint"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(MetricsError::Config("bad".into()))
    }
    assert!(returns_error().is_err());
}

#[test]
fn tag_transform_classification() {
    assert!(MetricsError::MissingHost(String::new()).is_tag_transform());
    assert!(
        MetricsError::InvalidEndpoint {
            value: String::new(),
            reason: String::new()
        }
        .is_tag_transform()
    );
    assert!(!MetricsError::Config(String::new()).is_tag_transform());
}

#[test]
fn collector_rejects_invalid_config() {
    let result = RequestMetricCollector::with_config(
        Arc::new(RecorderRegistry),
        CollectorConfig::new().namespace(" "),
    );
    assert!(matches!(result, Err(MetricsError::Config(_))));
}
