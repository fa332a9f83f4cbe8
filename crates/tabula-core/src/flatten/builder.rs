use super::{ColumnEntry, ColumnKind, ColumnPlan, FlatField};
use crate::describe::{describe, AppNameResolver};
use crate::schema::{type_label, Field, FieldTy, Schema, SYNTHETIC_CODE};

/// Options controlling the flatten pass.
#[derive(Debug, Clone, Copy)]
pub struct FlattenOptions {
    /// When off, label fields are dropped entirely, including group
    /// members; a group emptied by the drop disappears with them.
    pub include_labels: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            include_labels: true,
        }
    }
}

/// The flattened view of one schema: display descriptors plus the
/// matching column plan.
#[derive(Debug, Clone)]
pub struct FlatSchema<'a> {
    pub fields: Vec<FlatField<'a>>,
    pub plan: ColumnPlan,
}

impl<'a> FlatSchema<'a> {
    /// The descriptors that back plan columns, in plan order.
    ///
    /// Sub-table summaries and layout-only fields are display rows
    /// without a value column; everything else pairs 1:1 with the plan.
    pub fn columns(&self) -> impl Iterator<Item = &FlatField<'a>> {
        self.fields
            .iter()
            .filter(|field| !field.field.ty.is_subtable() && !field.field.ty.is_layout())
    }
}

/// Walks the schema in source order and produces the flat field list and
/// column plan.
///
/// A field code appearing inside a group is emitted only once, under its
/// parent; sub-table containers emit a single summary descriptor and no
/// column. Malformed containers degrade to zero members. The pass is a
/// pure function of its inputs and can be repeated to get a structurally
/// identical result.
pub fn flatten<'a>(
    schema: &'a Schema,
    options: &FlattenOptions,
    resolver: &dyn AppNameResolver,
) -> FlatSchema<'a> {
    let member_codes = schema.group_member_codes();

    let mut fields = Vec::new();
    let mut entries = Vec::new();

    for (key, field) in schema.fields() {
        if member_codes.contains(key) {
            log::debug!("field {key} emitted under its group; skipping top-level entry");
            continue;
        }

        if field.ty.is_label() && !options.include_labels {
            continue;
        }

        match &field.ty {
            FieldTy::Group(members) => {
                for (member_key, member) in members {
                    if member.ty.is_label() && !options.include_labels {
                        continue;
                    }

                    fields.push(descriptor(member, Some((key, field)), resolver));

                    if !member.ty.is_layout() {
                        entries.push(ColumnEntry {
                            kind: if member.ty.is_label() {
                                ColumnKind::Label
                            } else {
                                ColumnKind::GroupMember
                            },
                            code: member.code.clone(),
                            key: member_key.clone(),
                            parent: Some(key.to_string()),
                        });
                    }
                }
            }
            FieldTy::Subtable(_) => {
                // Sub-table rows are their own display/export section;
                // only the container summary joins the flat view.
                fields.push(descriptor(field, None, resolver));
            }
            _ => {
                fields.push(descriptor(field, None, resolver));

                if !field.ty.is_layout() {
                    entries.push(ColumnEntry {
                        kind: if field.ty.is_label() {
                            ColumnKind::Label
                        } else {
                            ColumnKind::Plain
                        },
                        code: field.code.clone(),
                        key: key.to_string(),
                        parent: None,
                    });
                }
            }
        }
    }

    FlatSchema {
        fields,
        plan: ColumnPlan { entries },
    }
}

fn descriptor<'a>(
    field: &'a Field,
    parent: Option<(&str, &Field)>,
    resolver: &dyn AppNameResolver,
) -> FlatField<'a> {
    // Code-less fields display the sentinel for both code and label.
    let label = if field.code.is_synthetic() {
        SYNTHETIC_CODE.to_string()
    } else {
        match parent {
            Some((_, group)) => format!("{}/{}", group.label, field.label),
            None => field.label.clone(),
        }
    };

    FlatField {
        code: field.code.clone(),
        label,
        type_label: type_label(field.ty.tag()).to_string(),
        required: field.required,
        description: field.description.clone(),
        option_summary: describe(field, resolver),
        is_group_member: parent.is_some(),
        parent_code: parent.map(|(key, _)| key.to_string()),
        field,
    }
}
