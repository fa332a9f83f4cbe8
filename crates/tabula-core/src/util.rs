use crate::Json;

/// Renders a JSON value the way a template would: strings bare, anything
/// else in its JSON form.
pub(crate) fn json_text(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders a JSON value in its serialized form (strings keep quotes).
pub(crate) fn json_render(value: &Json) -> String {
    value.to_string()
}

/// JavaScript-style truthiness, used where the source branched on the
/// presence of loosely-typed wire attributes.
pub(crate) fn truthy(value: &Json) -> bool {
    match value {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Json::String(s) => !s.is_empty() && s != "false",
        Json::Array(_) | Json::Object(_) => true,
    }
}
