//! Result projection
//!
//! Shapes a raw, type-filtered hit into the exact field set declared by the
//! schema registry plus type-specific derived display fields. Everything
//! else on the document — the discriminator, the surrogate key, the carried
//! graph fields — is dropped. A derived field whose source relationship was
//! unresolved is simply absent from the output, never null.

use serde_json::Value;
use tantivy::schema::Schema;
use tantivy::schema::Value as _;
use tantivy::TantivyDocument;

use crate::search::schema::{
    fields_for, EntityKind, ASSIGNED_SUBJECTS_FIELD, ASSIGNEE_NAME_FIELD,
    ORGANIZATION_NAME_FIELD, SUBMITTED_SUBJECTS_FIELD, SUBMITTER_NAME_FIELD,
};

/// A display-ready record: declared fields in declared order, then derived
/// fields. Serializes as a flat JSON object.
pub type ProjectedRecord = serde_json::Map<String, Value>;

/// Project one retrieved document for the active entity kind.
pub fn project(kind: EntityKind, doc: &TantivyDocument, schema: &Schema) -> ProjectedRecord {
    let mut out = ProjectedRecord::new();

    for spec in fields_for(kind) {
        let values = all_strings(doc, schema, spec.name);
        if values.is_empty() {
            continue;
        }
        if spec.multi {
            out.insert(
                spec.name.to_string(),
                Value::Array(values.into_iter().map(Value::String).collect()),
            );
        } else if let Some(first) = values.into_iter().next() {
            out.insert(spec.name.to_string(), Value::String(first));
        }
    }

    match kind {
        EntityKind::Users => project_user_relations(doc, schema, &mut out),
        EntityKind::Tickets => project_ticket_relations(doc, schema, &mut out),
        EntityKind::Organizations => {}
    }

    out
}

/// `organization` plus positional `assigned_ticket_N` / `submitted_ticket_N`
/// subject fields, in graph attachment order.
fn project_user_relations(doc: &TantivyDocument, schema: &Schema, out: &mut ProjectedRecord) {
    insert_derived(doc, schema, ORGANIZATION_NAME_FIELD, "organization", out);

    for (i, subject) in all_strings(doc, schema, ASSIGNED_SUBJECTS_FIELD)
        .into_iter()
        .enumerate()
    {
        out.insert(format!("assigned_ticket_{}", i), Value::String(subject));
    }
    for (i, subject) in all_strings(doc, schema, SUBMITTED_SUBJECTS_FIELD)
        .into_iter()
        .enumerate()
    {
        out.insert(format!("submitted_ticket_{}", i), Value::String(subject));
    }
}

fn project_ticket_relations(doc: &TantivyDocument, schema: &Schema, out: &mut ProjectedRecord) {
    insert_derived(doc, schema, ORGANIZATION_NAME_FIELD, "organization", out);
    insert_derived(doc, schema, ASSIGNEE_NAME_FIELD, "assignee", out);
    insert_derived(doc, schema, SUBMITTER_NAME_FIELD, "submitter", out);
}

fn insert_derived(
    doc: &TantivyDocument,
    schema: &Schema,
    stored_field: &str,
    key: &str,
    out: &mut ProjectedRecord,
) {
    if let Some(value) = first_string(doc, schema, stored_field) {
        out.insert(key.to_string(), Value::String(value));
    }
}

fn first_string(doc: &TantivyDocument, schema: &Schema, name: &str) -> Option<String> {
    let field = schema.get_field(name).ok()?;
    doc.get_first(field)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn all_strings(doc: &TantivyDocument, schema: &Schema, name: &str) -> Vec<String> {
    schema
        .get_field(name)
        .map(|field| {
            doc.get_all(field)
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
