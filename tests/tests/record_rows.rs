use pretty_assertions::assert_eq;
use tabula_core::describe::NullResolver;
use tabula_core::flatten::{flatten, FlattenOptions};
use tabula_core::record::{flatten_all, flatten_record, subtable_cell, subtable_row_count};
use tabula_core::Cell;
use tests::{sample_records, sample_schema};

#[test]
fn rich_record_extracts_every_value_kind() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let records = sample_records();

    let row = flatten_record(&schema, &records[0], &flat.plan);
    assert_eq!(row.record_id, "101");
    assert_eq!(row.len(), flat.plan.len());

    let expected = vec![
        Cell::Text("101".into()),                        // record_no
        Cell::Text("First order".into()),                // name
        Cell::Text("Open".into()),                       // status
        Cell::List(vec!["red".into(), "blue".into()]),   // tags
        Cell::Text("<b>Contact</b>".into()),             // heading label
        Cell::Text("a@example.com".into()),              // contact/email
        Cell::Text("555-0100".into()),                   // contact/phone
        Cell::Text("Reachable after 10am".into()),       // contact/note label
        Cell::Text("Acme Corp".into()),                  // customer (lookup unwrap)
        Cell::Empty,                                     // orders (no record value)
        Cell::List(vec!["Sato".into(), "suzuki".into()]), // assignee
        Cell::List(vec!["invoice.pdf".into()]),          // attachments
        Cell::Text("Admin".into()),                      // created_by
        Cell::Text("2024-06-01T09:30:00Z".into()),       // updated_at
    ];
    assert_eq!(row.cells, expected);
}

#[test]
fn sparse_record_applies_null_policy() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let records = sample_records();

    let row = flatten_record(&schema, &records[1], &flat.plan);
    assert_eq!(row.record_id, "102");

    // name is null: empty for CSV, placeholder for display.
    assert_eq!(row.cells[1], Cell::Empty);
    assert_eq!(row.cells[1].csv(), "");
    assert_eq!(row.cells[1].display(), "-");

    // status is null and a selection type: the unselected sentinel.
    assert_eq!(row.cells[2], Cell::Unselected);
    assert_eq!(row.cells[2].display(), "(unselected)");

    // tags is an empty array, not null: it passes through.
    assert_eq!(row.cells[3], Cell::List(vec![]));
    assert_eq!(row.cells[3].csv(), "");

    // Label columns still render the schema label.
    assert_eq!(row.cells[4], Cell::Text("<b>Contact</b>".into()));

    // Fields absent from the record entirely degrade to empty.
    assert_eq!(row.cells[5], Cell::Empty);
}

#[test]
fn all_rows_align_with_plan() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let records = sample_records();

    for row in flatten_all(&schema, &records, &flat.plan) {
        assert_eq!(row.len(), flat.plan.len());
    }
}

#[test]
fn subtable_row_counts_per_record() {
    let records = sample_records();

    assert_eq!(subtable_row_count(&records[0], "items"), 2);
    assert_eq!(subtable_cell(&records[0], "items").display(), "[table: 2 rows]");

    assert_eq!(subtable_row_count(&records[1], "items"), 0);
    assert_eq!(subtable_cell(&records[1], "items").display(), "[table: 0 rows]");
}
