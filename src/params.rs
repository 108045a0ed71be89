//! Request parameters and their wire encodings.
//!
//! Endpoint methods take a [`Params`] map. For GET requests the map is
//! filtered of empty values and encoded into the query string; for other
//! verbs it is carried as the request body verbatim. The asymmetry is
//! deliberate: a POST with an empty-string field sends that field, a GET
//! with the same field drops it.

use serde_json::Value;
use url::form_urlencoded;

/// An ordered mapping of parameter names to JSON values.
///
/// Insertion order is preserved, and query-string encoding follows it.
///
/// # Example
///
/// ```
/// use teamwork_api::Params;
///
/// let mut params = Params::new();
/// params.insert("status".into(), "active".into());
/// params.insert("page".into(), 2.into());
/// ```
pub type Params = serde_json::Map<String, Value>;

/// Returns `true` for values that a GET query string drops: null, false,
/// empty strings, numeric zero, and zero-length containers.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Stringify a value for URL encoding. Strings go through bare (no JSON
/// quotes); everything else uses its compact JSON form.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Encode `params` as an `application/x-www-form-urlencoded` string,
/// preserving iteration order. No filtering is applied.
pub(crate) fn encode_pairs(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &stringify(value));
    }
    serializer.finish()
}

/// Append the non-empty entries of `params` to `route` as a query string.
///
/// An empty or fully-filtered map leaves the route untouched.
pub(crate) fn append_query(route: &str, params: &Params) -> String {
    let filtered: Params = params
        .iter()
        .filter(|(_, v)| !is_empty_value(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    if filtered.is_empty() {
        return route.to_string();
    }

    let separator = if route.contains('?') { '&' } else { '?' };
    format!("{route}{separator}{}", encode_pairs(&filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params_from(value: Value) -> Params {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_values() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&json!(false)));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!(0)));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));

        assert!(!is_empty_value(&json!(true)));
        assert!(!is_empty_value(&json!("0")));
        assert!(!is_empty_value(&json!(1)));
        assert!(!is_empty_value(&json!([0])));
    }

    #[test]
    fn test_append_query_filters_empty() {
        let params = params_from(json!({
            "status": "active",
            "search": "",
            "page": 0,
            "include": null,
        }));
        assert_eq!(
            append_query("/projects.json", &params),
            "/projects.json?status=active"
        );
    }

    #[test]
    fn test_append_query_preserves_order() {
        let params = params_from(json!({
            "b": "2",
            "a": "1",
            "c": "3",
        }));
        assert_eq!(append_query("/x.json", &params), "/x.json?b=2&a=1&c=3");
    }

    #[test]
    fn test_append_query_encodes_values() {
        let params = params_from(json!({"q": "a b&c"}));
        assert_eq!(append_query("/x.json", &params), "/x.json?q=a+b%26c");
    }

    #[test]
    fn test_append_query_no_params() {
        let params = Params::new();
        assert_eq!(append_query("/projects.json", &params), "/projects.json");
    }

    #[test]
    fn test_append_query_existing_query() {
        let params = params_from(json!({"page": 2}));
        assert_eq!(append_query("/x.json?a=1", &params), "/x.json?a=1&page=2");
    }

    #[test]
    fn test_encode_pairs_keeps_empty() {
        // Form encoding is the non-JSON body fallback; it never filters.
        let params = params_from(json!({"name": "", "flag": false}));
        assert_eq!(encode_pairs(&params), "name=&flag=false");
    }
}
