//! Metric and tag name derivation.
//!
//! SDK field names are PascalCase (`ClientExecuteTime`). Metric names and
//! tag keys use the JavaBeans decapitalization rule so the names line up
//! with what other collectors emit for the same SDK fields:
//!
//! | raw                 | decapitalized       |
//! |---------------------|---------------------|
//! | `ClientExecuteTime` | `clientExecuteTime` |
//! | `ServiceName`       | `serviceName`       |
//! | `AWSErrorCode`      | `AWSErrorCode`      |
//! | `URL`               | `URL`               |
//! | `X`                 | `x`                 |

use std::borrow::Cow;

use crate::telemetry::NAMESPACE;

/// Decapitalize a name using the JavaBeans rule.
///
/// The first character is lower-cased, unless the first two characters are
/// both upper case, in which case the name is an acronym run and is returned
/// unchanged. Empty input stays empty.
pub fn decapitalize(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Cow::Borrowed(name);
    };
    if !first.is_uppercase() {
        return Cow::Borrowed(name);
    }
    if chars.next().is_some_and(char::is_uppercase) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len());
    out.extend(first.to_lowercase());
    out.push_str(&name[first.len_utf8()..]);
    Cow::Owned(out)
}

/// Metric name for a raw SDK field name under the default namespace.
///
/// ```rust
/// # use aws_request_metrics::naming::metric_name;
/// assert_eq!(metric_name("ClientExecuteTime"), "aws.request.clientExecuteTime");
/// ```
pub fn metric_name(raw: &str) -> String {
    metric_name_in(NAMESPACE, raw)
}

/// Metric name for a raw field name under `namespace`.
///
/// Names that already carry the namespace are returned as-is, so applying
/// this twice gives the same result as applying it once.
pub fn metric_name_in(namespace: &str, raw: &str) -> String {
    if !namespace.is_empty() && raw.starts_with(namespace) {
        return raw.to_string();
    }
    format!("{namespace}{}", decapitalize(raw))
}

/// Unqualified name of `T`, e.g. `GetObjectRequest` for
/// `my_sdk::s3::GetObjectRequest`.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    simplify_type_name(std::any::type_name::<T>())
}

/// Strip the module path and generic arguments from a type name.
pub(crate) fn simplify_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    let base = base.rsplit("::").next().unwrap_or(base);
    base.trim_start_matches('&')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decapitalize_edge_cases() {
        assert_eq!(decapitalize(""), "");
        assert_eq!(decapitalize("X"), "x");
        assert_eq!(decapitalize("x"), "x");
        assert_eq!(decapitalize("Xy"), "xy");
        assert_eq!(decapitalize("XY"), "XY");
        assert_eq!(decapitalize("AWSErrorCode"), "AWSErrorCode");
        assert_eq!(decapitalize("Ünter"), "ünter");
    }

    #[test]
    fn decapitalize_borrows_when_unchanged() {
        assert!(matches!(decapitalize("already"), Cow::Borrowed(_)));
        assert!(matches!(decapitalize("URL"), Cow::Borrowed(_)));
        assert!(matches!(decapitalize("Url"), Cow::Owned(_)));
    }

    #[test]
    fn simplify_strips_path_and_generics() {
        assert_eq!(simplify_type_name("a::b::GetObjectRequest"), "GetObjectRequest");
        assert_eq!(simplify_type_name("alloc::vec::Vec<alloc::string::String>"), "Vec");
        assert_eq!(simplify_type_name("&a::Foo"), "Foo");
        assert_eq!(simplify_type_name("str"), "str");
    }
}
