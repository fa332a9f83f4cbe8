use super::format::{format_condition, format_filter, format_sort};
use super::markup::{has_markup, strip_markup};
use super::resolver::{display_app_name, AppNameResolver};
use crate::schema::{Field, FieldTy, Lookup, ReferenceTable};
use crate::util::{json_render, json_text};
use crate::Json;

/// Plain-text summary of a field's type-specific configuration, suitable
/// for CSV cells. Markup is stripped from rich-text option values.
pub fn describe(field: &Field, resolver: &dyn AppNameResolver) -> String {
    render(field, resolver, Style::Plain)
}

/// Markup summary of a field's type-specific configuration, suitable for
/// display surfaces. Structure and resolution order match [`describe`];
/// only the rendering differs.
pub fn describe_rich(field: &Field, resolver: &dyn AppNameResolver) -> String {
    render(field, resolver, Style::Rich)
}

#[derive(Clone, Copy, PartialEq)]
enum Style {
    Plain,
    Rich,
}

impl Style {
    fn join(self) -> &'static str {
        match self {
            Self::Plain => "; ",
            Self::Rich => "<br>",
        }
    }

    fn pair(self, label: &str, value: &str) -> String {
        match self {
            Self::Plain => format!("{label}: {value}"),
            Self::Rich if has_markup(value) => {
                format!("<strong>{label}:</strong><div>{value}</div>")
            }
            Self::Rich => format!("<strong>{label}:</strong> {value}"),
        }
    }
}

fn render(field: &Field, resolver: &dyn AppNameResolver, style: Style) -> String {
    let mut details = Vec::new();

    if let Some(value) = default_summary(field) {
        details.push(style.pair("default value", &value));
    }

    // Mutually exclusive branches; first match wins. The lookup attribute
    // outranks every declared type except REFERENCE_TABLE.
    let body = match &field.ty {
        FieldTy::Label => style.pair("display text", &field.label),
        FieldTy::Calc(calc) => match &calc.expression {
            Some(expression) => style.pair("formula", expression),
            None => "computed field".to_string(),
        },
        FieldTy::ReferenceTable(reference) => reference_summary(reference, resolver, style),
        _ if field.lookup.is_some() => {
            lookup_summary(field.lookup.as_ref().unwrap(), resolver, style)
        }
        FieldTy::Group(members) => {
            style.pair("group member count", &members.len().to_string())
        }
        FieldTy::Subtable(members) => style.pair("sub-field count", &members.len().to_string()),
        _ => options_summary(field, style),
    };

    if !body.is_empty() {
        details.push(body);
    }

    details.join(style.join())
}

/// The default value declared for the field, if it should be shown.
/// Blank and whitespace-only strings are omitted entirely; rich-text
/// defaults keep their markup verbatim.
fn default_summary(field: &Field) -> Option<String> {
    let default = field.effective_default()?;

    match default {
        Json::String(s) => {
            if s.trim().is_empty() {
                None
            } else if matches!(field.ty, FieldTy::RichText) || has_markup(s) {
                Some(s.clone())
            } else {
                Some(json_render(default))
            }
        }
        _ => Some(json_render(default)),
    }
}

fn reference_summary(
    reference: &ReferenceTable,
    resolver: &dyn AppNameResolver,
    style: Style,
) -> String {
    let mut details = Vec::new();

    if let Some(app) = &reference.related_app {
        details.push(style.pair("related app", &display_app_name(resolver, &app.app)));
    }
    if let Some(condition) = &reference.condition {
        details.push(style.pair("condition", &format_condition(condition)));
    }
    if let Some(filter) = &reference.filter_cond {
        details.push(style.pair("filter", &format_filter(filter)));
    }
    if !reference.display_fields.is_empty() {
        details.push(style.pair("display fields", &reference.display_fields.join(", ")));
    }
    if let Some(sort) = &reference.sort {
        details.push(style.pair("sort", &format_sort(sort)));
    }

    if details.is_empty() {
        "reference list".to_string()
    } else {
        details.join(style.join())
    }
}

fn lookup_summary(lookup: &Lookup, resolver: &dyn AppNameResolver, style: Style) -> String {
    let mut details = Vec::new();

    if let Some(app) = &lookup.related_app {
        details.push(style.pair("source app", &display_app_name(resolver, &app.app)));
    }
    if let Some(key) = &lookup.related_key_field {
        details.push(style.pair("related key", key));
    }
    if !lookup.field_mappings.is_empty() {
        let mappings: Vec<String> = lookup
            .field_mappings
            .iter()
            .map(|mapping| format!("{}\u{2192}{}", mapping.field, mapping.related_field))
            .collect();
        details.push(style.pair("field mappings", &mappings.join(", ")));
    }
    if !lookup.picker_fields.is_empty() {
        details.push(style.pair("picker fields", &lookup.picker_fields.join(", ")));
    }
    if let Some(filter) = &lookup.filter_cond {
        details.push(style.pair("filter", &format_filter(filter)));
    }
    if let Some(sort) = &lookup.sort {
        details.push(style.pair("sort", &format_sort(sort)));
    }

    if details.is_empty() {
        "lookup".to_string()
    } else {
        details.join(style.join())
    }
}

fn options_summary(field: &Field, style: Style) -> String {
    let Some(options) = &field.options else {
        return String::new();
    };

    if field.ty.is_selection() {
        let choices: Vec<String> = options
            .iter()
            .map(|(key, value)| {
                let label = value
                    .get("label")
                    .and_then(Json::as_str)
                    .map(String::from)
                    .unwrap_or_else(|| json_text(value));
                match style {
                    Style::Plain => format!("{key}:{label}"),
                    Style::Rich => format!("<strong>{key}:</strong>{label}"),
                }
            })
            .collect();
        return choices.join(style.join());
    }

    let entries: Vec<String> = options
        .iter()
        .map(|(key, value)| match (style, value) {
            // Rich-text defaults: text only in the plain variant, markup
            // kept in the rich variant.
            (Style::Plain, Json::String(s))
                if key == "defaultValue" && matches!(field.ty, FieldTy::RichText) =>
            {
                format!("{key}: {}", strip_markup(s))
            }
            (Style::Rich, Json::String(s)) if has_markup(s) => {
                format!("<strong>{key}:</strong><div>{s}</div>")
            }
            (Style::Plain, _) => format!("{key}={}", json_render(value)),
            (Style::Rich, _) => format!("<strong>{key}=</strong>{}", json_render(value)),
        })
        .collect();

    entries.join(style.join())
}
