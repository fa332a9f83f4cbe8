//! Plain-text rendering of condition, filter, and sort trees.
//!
//! Each formatter is a pure recursive function over the immutable tree.
//! Absent tokens are omitted; nested sub-conditions join with `AND`.

use crate::schema::{Condition, ConditionNode, Sort};
use crate::util::json_text;
use crate::Json;

/// Formats a reference-table join condition.
pub fn format_condition(condition: &Condition) -> String {
    match condition {
        Condition::Text(text) => text.clone(),
        Condition::Node(node) => {
            let mut parts = leaf_tokens(node);

            if !node.conditions.is_empty() {
                let subs: Vec<String> = node.conditions.iter().map(format_condition).collect();
                parts.push(format!("condition: {}", subs.join(" AND ")));
            }

            parts.join(" ")
        }
    }
}

/// Formats a narrowing filter. Nodes carrying sub-conditions render only
/// the combined sub-filters; leaves render their tokens.
pub fn format_filter(filter: &Condition) -> String {
    match filter {
        Condition::Text(text) => text.clone(),
        Condition::Node(node) => {
            if node.conditions.is_empty() {
                leaf_tokens(node).join(" ")
            } else {
                let subs: Vec<String> = node.conditions.iter().map(format_filter).collect();
                format!("filter: {}", subs.join(" AND "))
            }
        }
    }
}

/// Formats a sort directive.
pub fn format_sort(sort: &Sort) -> String {
    match sort {
        Sort::Text(text) => text.clone(),
        Sort::Spec(spec) => {
            let mut parts = Vec::new();
            if let Some(field) = &spec.field {
                parts.push(format!("field: {field}"));
            }
            if let Some(order) = &spec.order {
                parts.push(format!("order: {order}"));
            }
            parts.join(", ")
        }
    }
}

fn leaf_tokens(node: &ConditionNode) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(field) = &node.field {
        parts.push(format!("field: {field}"));
    }
    if let Some(related) = &node.related_field {
        parts.push(format!("related field: {related}"));
    }
    if let Some(operator) = &node.operator {
        parts.push(format!("operator: {operator}"));
    }
    if let Some(value) = &node.value {
        parts.push(format!("value: {}", value_token(value)));
    }

    parts
}

fn value_token(value: &Json) -> String {
    match value {
        Json::Array(items) => {
            let items: Vec<String> = items.iter().map(json_text).collect();
            format!("[{}]", items.join(", "))
        }
        other => json_text(other),
    }
}
