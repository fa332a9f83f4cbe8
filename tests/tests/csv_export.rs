use pretty_assertions::assert_eq;
use tabula_core::describe::NullResolver;
use tabula_core::flatten::{flatten, FlattenOptions};
use tabula_csv::{Serializer, BOM, NO_DATA};
use tests::{sample_directory, sample_records, sample_schema};

#[test]
fn exports_start_with_byte_order_mark() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let records = sample_records();
    let serializer = Serializer::new(&schema);

    for output in [
        serializer.schema_csv(&flat),
        serializer.records_csv(&flat, &records),
        serializer.full_export(&flat, &records),
    ] {
        assert!(output.starts_with(BOM), "missing BOM prefix");
    }
}

#[test]
fn record_header_matches_plan_order() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let records = sample_records();

    let csv = Serializer::new(&schema).records_csv(&flat, &records);
    let header = csv.trim_start_matches(BOM).lines().next().unwrap();

    assert_eq!(
        header,
        "\"record id\",\"No.(record_no)\",\"Name(name)\",\"Status(status)\",\"Tags(tags)\",\
         \"undefined(undefined)\",\"Contact/Email(email)\",\"Contact/Phone(phone)\",\
         \"undefined(undefined)\",\"Customer(customer)\",\"Orders(orders)\",\
         \"Assignee(assignee)\",\"Attachments(attachments)\",\"Created by(created_by)\",\
         \"Updated at(updated_at)\""
    );
}

#[test]
fn quotes_are_doubled() {
    let schema = tabula_core::Schema::from_json(
        r#"{ "properties": {
            "memo": { "type": "SINGLE_LINE_TEXT", "code": "memo", "label": "Memo" }
        } }"#,
    )
    .unwrap();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let records = tabula_core::Record::list_from_json(
        r#"{ "records": [ {
            "$id": { "value": "1" },
            "memo": { "type": "SINGLE_LINE_TEXT", "value": "He said \"hi\"" }
        } ] }"#,
    )
    .unwrap();

    let csv = Serializer::new(&schema).records_csv(&flat, &records);
    let data = csv.trim_start_matches(BOM).lines().nth(1).unwrap();
    assert_eq!(data, "\"1\",\"He said \"\"hi\"\"\"");
}

#[test]
fn empty_record_set_is_explicit() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let serializer = Serializer::new(&schema);

    assert_eq!(
        serializer.records_csv(&flat, &[]),
        format!("{BOM}{NO_DATA}")
    );
    assert_eq!(
        serializer.full_export(&flat, &[]),
        format!("{BOM}{NO_DATA}")
    );
}

#[test]
fn full_export_has_main_banner_and_sections() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &NullResolver);
    let records = sample_records();

    let csv = Serializer::new(&schema).full_export(&flat, &records);
    let body = csv.trim_start_matches(BOM);

    assert!(body.starts_with("=== main records ==="));
    assert!(body.contains("subtable: Items"));

    // Sub-table rows carry the parent record id and join multi-values
    // with the section separator.
    assert!(body.contains("\"101\",\"A-1\",\"3\",\"bulk\""));
    assert!(body.contains("\"101\",\"B-2\",\"5\",\"\""));
}

#[test]
fn subtable_section_shape() {
    let schema = sample_schema();
    let records = sample_records();

    let sections = Serializer::new(&schema).subtable_sections(&records);
    assert_eq!(sections.len(), 1);

    let section = &sections[0];
    assert_eq!(section.title, "subtable: Items");

    let lines: Vec<&str> = section.body.lines().collect();
    assert_eq!(lines[0], "\"record id\",\"SKU\",\"Qty\",\"Kind\"");
    assert_eq!(lines.len(), 3, "two data rows after the header");
}

#[test]
fn schema_export_includes_option_summaries() {
    let schema = sample_schema();
    let flat = flatten(&schema, &FlattenOptions::default(), &sample_directory());

    let csv = Serializer::new(&schema).schema_csv(&flat);
    let body = csv.trim_start_matches(BOM);

    assert!(body.contains("\"open:Open; done:Done\""));
    assert!(body.contains("source app: Customers (31)"));
    assert!(body.contains("related app: Orders (14)"));
    assert!(body.contains("\"sub-field count: 3\""));
}
