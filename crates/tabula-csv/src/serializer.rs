use crate::fmt::CsvWriter;
use crate::{Section, BOM, NO_DATA};

use tabula_core::flatten::FlatSchema;
use tabula_core::record::{flatten_all, Record};
use tabula_core::schema::SYNTHETIC_CODE;
use tabula_core::{Json, Schema};

/// Serializes flattened schema and record views to CSV text.
///
/// Borrows the schema the views were derived from; sub-table sections
/// walk it directly, independent of the main flatten pass.
#[derive(Debug)]
pub struct Serializer<'a> {
    schema: &'a Schema,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// The schema itself as a CSV table, one row per flat descriptor.
    pub fn schema_csv(&self, flat: &FlatSchema<'_>) -> String {
        let mut out = String::from(BOM);

        let mut writer = CsvWriter::new();
        writer.row([
            "level",
            "parent field",
            "field code",
            "field name",
            "field type",
            "required",
            "description",
            "option details",
        ]);

        for field in &flat.fields {
            writer.row([
                if field.is_group_member { "group" } else { "main" },
                field.parent_code.as_deref().unwrap_or(""),
                field.code.display(),
                field.label.as_str(),
                field.type_label.as_str(),
                if field.required { "yes" } else { "no" },
                field.description.as_str(),
                field.option_summary.as_str(),
            ]);
        }

        out.push_str(&writer.finish());
        out
    }

    /// The main record table: `record id` plus one column per plan entry.
    pub fn records_csv(&self, flat: &FlatSchema<'_>, records: &[Record]) -> String {
        let mut out = String::from(BOM);

        if records.is_empty() {
            out.push_str(NO_DATA);
            return out;
        }

        let mut writer = CsvWriter::new();
        self.record_rows(&mut writer, flat, records);
        out.push_str(&writer.finish());
        out
    }

    /// The main table plus one section per sub-table field.
    pub fn full_export(&self, flat: &FlatSchema<'_>, records: &[Record]) -> String {
        let mut out = String::from(BOM);

        if records.is_empty() {
            out.push_str(NO_DATA);
            return out;
        }

        let mut writer = CsvWriter::new();
        writer.line("=== main records ===");
        self.record_rows(&mut writer, flat, records);

        for section in self.subtable_sections(records) {
            writer.line("");
            writer.line(section.title);
            writer.line(section.body);
        }

        out.push_str(&writer.finish());
        out
    }

    /// One export section per sub-table field, independent of the main
    /// flatten pass: a header of member labels, then one row per
    /// sub-table row per parent record.
    pub fn subtable_sections(&self, records: &[Record]) -> Vec<Section> {
        let mut sections = Vec::new();

        for (code, field) in self.schema.subtables() {
            let Some(members) = field.members() else {
                continue;
            };

            let title = if field.label.is_empty() {
                format!("subtable: {code}")
            } else {
                format!("subtable: {}", field.label)
            };

            let mut writer = CsvWriter::new();
            let mut header = vec!["record id".to_string()];
            header.extend(members.iter().map(|(member_key, member)| {
                if member.code.is_synthetic() {
                    SYNTHETIC_CODE.to_string()
                } else if member.label.is_empty() {
                    member_key.clone()
                } else {
                    member.label.clone()
                }
            }));
            writer.row(&header);

            let mut row_count = 0usize;
            for record in records {
                let Some(value) = record.value(code) else {
                    continue;
                };

                for row in value.table_rows() {
                    let mut cells = vec![record.record_id.clone()];
                    cells.extend(members.keys().map(|member_key| {
                        row.value
                            .get(member_key)
                            .map(|cell| match &cell.value {
                                Json::Array(_) => cell.string_list().join("; "),
                                _ => cell.scalar_text(),
                            })
                            .unwrap_or_default()
                    }));
                    writer.row(&cells);
                    row_count += 1;
                }
            }

            if row_count == 0 {
                log::debug!("subtable {code} has no rows across the record set");
                writer.line(NO_DATA);
            }

            sections.push(Section {
                title,
                body: writer.finish(),
            });
        }

        sections
    }

    fn record_rows(&self, writer: &mut CsvWriter, flat: &FlatSchema<'_>, records: &[Record]) {
        let mut header = vec!["record id".to_string()];
        header.extend(flat.columns().map(|column| column.header()));
        writer.row(&header);

        for row in flatten_all(self.schema, records, &flat.plan) {
            let mut cells = vec![row.record_id.clone()];
            cells.extend(row.cells.iter().map(|cell| cell.csv()));
            writer.row(&cells);
        }
    }
}
