use super::{Cell, FieldValue, Record};
use crate::flatten::{ColumnEntry, ColumnKind, ColumnPlan};
use crate::schema::{Field, FieldTy, Schema};

/// One record projected onto a column plan.
///
/// `cells` is positionally aligned with the plan that produced it:
/// `cells.len()` always equals the plan length.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub record_id: String,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Projects one record onto the plan, one cell per planned column.
pub fn flatten_record(schema: &Schema, record: &Record, plan: &ColumnPlan) -> Row {
    let cells = plan
        .iter()
        .map(|entry| extract(schema, record, entry))
        .collect();

    Row {
        record_id: record.record_id.clone(),
        cells,
    }
}

/// Projects every record onto the plan.
pub fn flatten_all(schema: &Schema, records: &[Record], plan: &ColumnPlan) -> Vec<Row> {
    records
        .iter()
        .map(|record| flatten_record(schema, record, plan))
        .collect()
}

/// Number of rows in a record's sub-table field.
pub fn subtable_row_count(record: &Record, code: &str) -> usize {
    record.value(code).map(FieldValue::row_count).unwrap_or(0)
}

/// Display cell for a sub-table column: the row-count annotation.
pub fn subtable_cell(record: &Record, code: &str) -> Cell {
    Cell::RowCount(subtable_row_count(record, code))
}

fn extract(schema: &Schema, record: &Record, entry: &ColumnEntry) -> Cell {
    let Some(field) = entry.field(schema) else {
        log::warn!("column {} not found in schema; emitting empty cell", entry.code);
        return Cell::Empty;
    };

    // Records carry no value for labels; the declared label is the value.
    if entry.kind == ColumnKind::Label || field.ty.is_label() {
        return Cell::Text(field.label.clone());
    }

    // Group membership does not change where the value lives: members
    // read the record's flat field, keyed the same as top-level fields.
    let Some(value) = record.value(&entry.key) else {
        return null_cell(field);
    };

    if value.is_null() {
        return null_cell(field);
    }

    match &field.ty {
        ty if ty.is_entity_select() => Cell::List(value.entry_names()),
        FieldTy::File => Cell::List(value.file_names()),
        ty if ty.is_multi_valued() => Cell::List(value.string_list()),
        // The lookup capability wins over the remaining declared types:
        // the resolved value is unwrapped once and used as-is.
        _ if field.is_lookup() => text_cell(value.scalar_text()),
        FieldTy::Modifier | FieldTy::Creator => text_cell(value.actor_text()),
        FieldTy::UpdatedTime | FieldTy::CreatedTime => text_cell(value.scalar_text()),
        _ => text_cell(value.scalar_text()),
    }
}

fn text_cell(text: String) -> Cell {
    if text.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(text)
    }
}

fn null_cell(field: &Field) -> Cell {
    if field.ty.is_selection() {
        Cell::Unselected
    } else {
        Cell::Empty
    }
}
