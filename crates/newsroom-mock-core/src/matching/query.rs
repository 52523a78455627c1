//! Query string parsing with URL decoding.

use std::collections::HashMap;

/// Parse a query string into a map with percent-decoding.
pub fn parse_query_string(query_str: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();

    if query_str.is_empty() {
        return result;
    }

    for pair in query_str.split('&') {
        if pair.is_empty() {
            continue;
        }

        let parts: Vec<&str> = pair.splitn(2, '=').collect();
        let key = urlencoding::decode(parts[0])
            .unwrap_or_else(|_| parts[0].into())
            .to_string();
        let value = if parts.len() > 1 {
            urlencoding::decode(parts[1])
                .unwrap_or_else(|_| parts[1].into())
                .to_string()
        } else {
            String::new()
        };

        // Handle multiple values for the same key
        if let Some(existing) = result.get_mut(&key) {
            existing.push(',');
            existing.push_str(&value);
        } else {
            result.insert(key, value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn h(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[rstest]
    #[case("", &[])]
    #[case("user_email=a@example.com", &[("user_email", "a@example.com")])]
    #[case(
        "user_email=a@example.com&sv_id=5&app=myapp",
        &[("user_email", "a@example.com"), ("sv_id", "5"), ("app", "myapp")]
    )]
    #[case("user_email=a%40example.com", &[("user_email", "a@example.com")])]
    #[case("key=value%20with%20spaces", &[("key", "value with spaces")])]
    #[case("key%20name=value", &[("key name", "value")])]
    #[case("sv_id=1&sv_id=2", &[("sv_id", "1,2")])]
    // Empty pairs are skipped
    #[case("sv_id=1&&app=myapp", &[("sv_id", "1"), ("app", "myapp")])]
    #[case("&sv_id=1", &[("sv_id", "1")])]
    #[case("sv_id=1&", &[("sv_id", "1")])]
    // Key without value
    #[case("sv_id=&app=myapp", &[("sv_id", ""), ("app", "myapp")])]
    #[case("sv_id&app=myapp", &[("sv_id", ""), ("app", "myapp")])]
    fn test_parse_query_string(#[case] query_str: &str, #[case] expected: &[(&str, &str)]) {
        assert_eq!(parse_query_string(query_str), h(expected));
    }
}
