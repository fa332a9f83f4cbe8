use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tabula_core::describe::NullResolver;
use tabula_core::flatten::{flatten, ColumnKind, FlattenOptions};
use tests::{sample_directory, sample_schema};

#[test]
fn every_real_code_emitted_exactly_once() {
    tests::init_logging();
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &sample_directory());

    let mut seen = HashSet::new();
    for field in &flat.fields {
        if let Some(code) = field.code.as_real() {
            assert!(seen.insert(code.to_string()), "duplicate code {code}");
        }
    }

    let expected: HashSet<String> = [
        "record_no",
        "name",
        "status",
        "tags",
        "email",
        "phone",
        "customer",
        "orders",
        "items",
        "assignee",
        "attachments",
        "created_by",
        "updated_at",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(seen, expected);
}

#[test]
fn group_members_carry_parent_and_composite_label() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);

    let email = flat
        .fields
        .iter()
        .find(|f| f.code.as_real() == Some("email"))
        .unwrap();
    assert!(email.is_group_member);
    assert_eq!(email.parent_code.as_deref(), Some("contact"));
    assert_eq!(email.label, "Contact/Email");
    assert_eq!(email.header(), "Contact/Email(email)");
}

#[test]
fn plan_aligns_with_column_descriptors() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);

    let columns: Vec<_> = flat.columns().collect();
    assert_eq!(columns.len(), flat.plan.len());
    for (descriptor, entry) in columns.iter().zip(flat.plan.iter()) {
        assert_eq!(descriptor.code, entry.code, "plan drifted from headers");
    }

    // The sub-table container is a descriptor but never a column.
    assert!(flat.fields.iter().any(|f| f.code.as_real() == Some("items")));
    assert!(flat.plan.iter().all(|e| e.code.as_real() != Some("items")));
}

#[test]
fn label_filter_drops_labels_and_their_columns() {
    let schema = sample_schema();
    let flat = flatten(
        &schema,
        &FlattenOptions {
            include_labels: false,
        },
        &NullResolver,
    );

    assert!(flat.fields.iter().all(|f| !f.field.ty.is_label()));
    assert!(flat.plan.iter().all(|e| e.kind != ColumnKind::Label));

    // Non-label group members survive the filter.
    assert!(flat
        .fields
        .iter()
        .any(|f| f.is_group_member && f.code.as_real() == Some("phone")));
}

#[test]
fn flatten_twice_is_structurally_identical() {
    let schema = sample_schema();
    let options = FlattenOptions::default();

    let first = flatten(&schema, &options, &NullResolver);
    let second = flatten(&schema, &options, &NullResolver);

    assert_eq!(first.plan, second.plan);
    let headers: Vec<String> = first.fields.iter().map(|f| f.header()).collect();
    let again: Vec<String> = second.fields.iter().map(|f| f.header()).collect();
    assert_eq!(headers, again);
}

#[test]
fn record_display_schema_never_contains_labels() {
    let schema = sample_schema().without_labels();

    assert!(schema.fields().all(|(_, field)| !field.ty.is_label()));

    // The group keeps its non-label members.
    let contact = schema.get("contact").unwrap();
    let members = contact.members().unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.contains_key("email"));
    assert!(members.contains_key("phone"));
}

#[test]
fn summary_counts() {
    let schema = sample_schema();
    assert_eq!(schema.count_groups(), 1);
    assert_eq!(schema.count_subtables(), 1);
    assert_eq!(schema.subtables().count(), 1);
}
