//! Host and path-prefix matching.

/// Path component of a request target, without the query string.
pub fn path_of(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Query string of a request target, without the leading `?`.
pub fn query_of(url: &str) -> Option<&str> {
    url.split_once('?').map(|(_, query)| query)
}

/// The pure match predicate: exact host plus path prefix.
///
/// Method, query string, and body are not inspected here; the interception
/// layer uses this answer to decide whether the handler sees the request
/// at all.
pub fn targets_api(host: &str, path: &str, api_host: &str, api_prefix: &str) -> bool {
    host == api_host && path.starts_with(api_prefix)
}
