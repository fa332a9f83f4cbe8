use crate::Json;

/// A reference/lookup condition tree.
///
/// The source delivers these in three shapes: a preformatted string, a
/// single object with field/operator/value tokens, or an object carrying
/// a list of sub-conditions. Sub-conditions nest recursively.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// A preformatted condition string, passed through verbatim.
    Text(String),

    /// A structured node; any token may be absent.
    Node(ConditionNode),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionNode {
    pub field: Option<String>,
    pub related_field: Option<String>,
    pub operator: Option<String>,
    pub value: Option<Json>,

    /// Nested sub-conditions, combined with AND.
    pub conditions: Vec<Condition>,
}

/// A sort directive: preformatted text or a field/order pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Sort {
    Text(String),
    Spec(SortSpec),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortSpec {
    pub field: Option<String>,
    pub order: Option<String>,
}

impl Condition {
    /// Converts a wire value into a condition tree. Unexpected shapes
    /// degrade to their JSON rendering rather than failing.
    pub fn from_value(value: &Json) -> Self {
        match value {
            Json::String(s) => Self::Text(s.clone()),
            Json::Object(map) => {
                let conditions = map
                    .get("conditions")
                    .and_then(Json::as_array)
                    .map(|subs| subs.iter().map(Self::from_value).collect())
                    .unwrap_or_default();

                Self::Node(ConditionNode {
                    field: str_token(map.get("field")),
                    related_field: str_token(map.get("relatedField")),
                    operator: str_token(map.get("operator")),
                    value: map.get("value").cloned(),
                    conditions,
                })
            }
            other => Self::Text(other.to_string()),
        }
    }
}

impl Sort {
    pub fn from_value(value: &Json) -> Self {
        match value {
            Json::String(s) => Self::Text(s.clone()),
            Json::Object(map) => Self::Spec(SortSpec {
                field: str_token(map.get("field")),
                order: str_token(map.get("order")),
            }),
            other => Self::Text(other.to_string()),
        }
    }
}

fn str_token(value: Option<&Json>) -> Option<String> {
    value.and_then(Json::as_str).map(String::from)
}
