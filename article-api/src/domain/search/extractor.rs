//! Turns raw query-string pairs into a [`FilterRequest`].
//!
//! Repeatable parameters (`orGroup`, `exclude`, `podcast`, `company`) keep
//! every occurrence in order. Single parameters (`title`, `text`, `url`, `q`)
//! keep the last occurrence, and an empty value counts as absent.

use super::types::FilterRequest;

/// Build a [`FilterRequest`] from query pairs in request order.
///
/// # Examples
///
/// ```
/// use article_api::domain::search::extract_filter_request;
///
/// let pairs = vec![
///     ("orGroup".to_string(), "kafka|latency".to_string()),
///     ("orGroup".to_string(), "grpc".to_string()),
///     ("title".to_string(), "scal".to_string()),
/// ];
/// let request = extract_filter_request(&pairs);
/// assert_eq!(request.or_groups, vec!["kafka|latency", "grpc"]);
/// assert_eq!(request.title.as_deref(), Some("scal"));
/// ```
pub fn extract_filter_request(pairs: &[(String, String)]) -> FilterRequest {
    FilterRequest {
        or_groups: all_values(pairs, "orGroup"),
        excludes: all_values(pairs, "exclude"),
        title: last_value(pairs, "title"),
        url: last_value(pairs, "url"),
        text: last_value(pairs, "text"),
        podcasts: all_values(pairs, "podcast"),
        companies: all_values(pairs, "company"),
    }
}

/// The `q` parameter of the simple search.
pub fn extract_simple_query(pairs: &[(String, String)]) -> Option<String> {
    last_value(pairs, "q")
}

fn all_values(pairs: &[(String, String)], name: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .collect()
}

fn last_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .filter(|value| !value.is_empty())
}
