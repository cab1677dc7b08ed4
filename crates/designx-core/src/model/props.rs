//! Helpers for reading loosely structured property bags.

use serde_json::Value;

/// Value standing in for a callable member in a property bag
///
/// A live object graph holds functions; dumps and in-memory trees mark a
/// method by this string instead.
pub const METHOD_MARKER: &str = "function";

/// Provider props keep the provided object under this key
pub const PROVIDER_VALUE_KEY: &str = "value";

/// Get a field from a bag, treating `null` as absent
pub fn field<'a>(bag: &'a Value, key: &str) -> Option<&'a Value> {
    bag.get(key).filter(|v| !v.is_null())
}

/// Whether `value` marks a callable member
pub fn is_method(value: &Value) -> bool {
    value.as_str() == Some(METHOD_MARKER)
}

/// Whether `bag` exposes `method` as a callable member
pub fn has_method(bag: &Value, method: &str) -> bool {
    field(bag, method).is_some_and(is_method)
}

/// Names of all callable members of `bag`, sorted
pub fn method_names(bag: &Value) -> Vec<String> {
    let mut names: Vec<String> = bag
        .as_object()
        .map(|obj| {
            obj.iter()
                .filter(|(_, v)| is_method(v))
                .map(|(k, _)| k.clone())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
