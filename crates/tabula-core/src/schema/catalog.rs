/// Maps a raw field-type tag to its display label.
///
/// Total over the closed enumeration; unrecognized tags pass through
/// unchanged rather than erroring.
pub fn type_label(tag: &str) -> &str {
    match tag {
        "SINGLE_LINE_TEXT" => "text (single line)",
        "MULTI_LINE_TEXT" => "text (multi line)",
        "RICH_TEXT" => "rich text",
        "NUMBER" => "number",
        "CALC" => "calculated",
        "RADIO_BUTTON" => "radio button",
        "CHECK_BOX" => "checkbox",
        "MULTI_SELECT" => "multi select",
        "DROP_DOWN" => "dropdown",
        "DATE" => "date",
        "TIME" => "time",
        "DATETIME" => "date and time",
        "LINK" => "link",
        "FILE" => "attachment",
        "USER_SELECT" => "user selection",
        "ORGANIZATION_SELECT" => "organization selection",
        "GROUP_SELECT" => "group selection",
        "LOOKUP" => "lookup",
        "REFERENCE_TABLE" => "reference list",
        "SUBTABLE" => "table",
        "GROUP" => "group",
        "LABEL" => "label",
        "CREATOR" => "created by",
        "CREATED_TIME" => "created at",
        "MODIFIER" => "updated by",
        "UPDATED_TIME" => "updated at",
        "CATEGORY" => "category",
        "STATUS" => "status",
        "STATUS_ASSIGNEE" => "assignee",
        "RECORD_NUMBER" => "record number",
        "SPACER" => "spacer",
        "HR" => "divider",
        other => other,
    }
}
