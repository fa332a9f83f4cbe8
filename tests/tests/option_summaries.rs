use pretty_assertions::assert_eq;
use tabula_core::describe::{describe, describe_rich, display_app_name, NullResolver};
use tabula_core::schema::type_label;
use tests::{sample_directory, sample_schema};

#[test]
fn lookup_summary_resolves_app_names() {
    let schema = sample_schema();
    let customer = schema.get("customer").unwrap();

    assert_eq!(
        describe(customer, &sample_directory()),
        "source app: Customers (31); related key: customer_id; \
         field mappings: address\u{2192}hq_address; picker fields: customer_id, company"
    );

    // Without the directory the placeholder keeps the summary usable.
    assert_eq!(
        describe(customer, &NullResolver),
        "source app: app id: 31; related key: customer_id; \
         field mappings: address\u{2192}hq_address; picker fields: customer_id, company"
    );
}

#[test]
fn reference_table_summary() {
    let schema = sample_schema();
    let orders = schema.get("orders").unwrap();

    assert_eq!(
        describe(orders, &sample_directory()),
        "related app: Orders (14); condition: field: customer related field: customer; \
         display fields: order_no, total; sort: field: order_no, order: desc"
    );
}

#[test]
fn rich_variant_matches_plain_structure() {
    let schema = sample_schema();
    let status = schema.get("status").unwrap();

    assert_eq!(describe(status, &NullResolver), "open:Open; done:Done");
    assert_eq!(
        describe_rich(status, &NullResolver),
        "<strong>open:</strong>Open<br><strong>done:</strong>Done"
    );
}

#[test]
fn group_and_subtable_summaries_count_members() {
    let schema = sample_schema();

    assert_eq!(
        describe(schema.get("contact").unwrap(), &NullResolver),
        "group member count: 3"
    );
    assert_eq!(
        describe(schema.get("items").unwrap(), &NullResolver),
        "sub-field count: 3"
    );
}

#[test]
fn label_summary_is_the_display_text() {
    let schema = sample_schema();
    assert_eq!(
        describe(schema.get("heading").unwrap(), &NullResolver),
        "display text: <b>Contact</b>"
    );
}

#[test]
fn type_catalog_is_fail_open() {
    assert_eq!(type_label("DROP_DOWN"), "dropdown");
    assert_eq!(type_label("REFERENCE_TABLE"), "reference list");
    assert_eq!(type_label("NOT_A_REAL_TYPE"), "NOT_A_REAL_TYPE");
}

#[test]
fn unknown_app_id_placeholder() {
    assert_eq!(display_app_name(&NullResolver, "77"), "app id: 77");
}
