//! Schema registry
//!
//! Declares, per entity kind, the ordered user-facing field list and the
//! matching discipline applied to each field. This is static declarative
//! metadata: the index builder reads it to pick an analyzer per field and
//! the result projector reads it as the projection whitelist.

use std::collections::HashSet;
use strum::{Display, EnumString};
use tantivy::schema::{IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING};

/// Discriminator stamped on every indexed record
pub const DOC_TYPE_FIELD: &str = "doc_type";

/// Index-internal surrogate key, never projected
pub const DOC_KEY_FIELD: &str = "doc_key";

/// Store-only derived fields carried from the enriched graph into the index
pub const ORGANIZATION_NAME_FIELD: &str = "organization_name";
pub const SUBMITTER_NAME_FIELD: &str = "submitter_name";
pub const ASSIGNEE_NAME_FIELD: &str = "assignee_name";
pub const ASSIGNED_SUBJECTS_FIELD: &str = "assigned_ticket_subjects";
pub const SUBMITTED_SUBJECTS_FIELD: &str = "submitted_ticket_subjects";

/// Name the English analyzer is registered under on the index
pub const TEXT_ANALYZER: &str = "en_text";

/// The entity kind a search session is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum EntityKind {
    Users,
    Organizations,
    Tickets,
}

impl EntityKind {
    /// The discriminator value records of this kind carry in the index
    pub fn doc_type(self) -> DocType {
        match self {
            EntityKind::Users => DocType::User,
            EntityKind::Organizations => DocType::Organization,
            EntityKind::Tickets => DocType::Ticket,
        }
    }
}

/// Per-record discriminator, assigned at enrichment time and never altered
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DocType {
    User,
    Organization,
    Ticket,
}

/// Matching discipline for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Full normalized-value equality; stored untokenized. Used for ids,
    /// foreign keys, and boolean flags.
    Exact,
    /// Containment of a language-normalized word token. Used for free text
    /// and tag lists.
    Text,
}

/// One declared user-facing field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Whether the field holds a list of values (projects as an array)
    pub multi: bool,
}

const fn exact(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Exact,
        multi: false,
    }
}

const fn text(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Text,
        multi: false,
    }
}

const fn text_list(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Text,
        multi: true,
    }
}

/// User fields in natural attribute declaration order
const USER_FIELDS: &[FieldSpec] = &[
    exact("_id"),
    text("url"),
    exact("external_id"),
    text("name"),
    text("alias"),
    text("created_at"),
    exact("active"),
    exact("shared"),
    exact("verified"),
    text("locale"),
    text("timezone"),
    text("last_login_at"),
    text("email"),
    text("phone"),
    text("signature"),
    exact("organization_id"),
    text_list("tags"),
    exact("suspended"),
    text("role"),
];

/// Organization fields in natural attribute declaration order
const ORGANIZATION_FIELDS: &[FieldSpec] = &[
    exact("_id"),
    text("url"),
    exact("external_id"),
    text("name"),
    text_list("domain_names"),
    text("created_at"),
    text("details"),
    exact("shared_tickets"),
    text_list("tags"),
];

/// Ticket fields in natural attribute declaration order
const TICKET_FIELDS: &[FieldSpec] = &[
    exact("_id"),
    text("url"),
    exact("external_id"),
    text("created_at"),
    text("type"),
    text("subject"),
    text("description"),
    text("priority"),
    text("status"),
    text_list("tags"),
    exact("has_incidents"),
    text("due_at"),
    text("via"),
    exact("submitter_id"),
    exact("assignee_id"),
    exact("organization_id"),
];

/// The declared field list for one entity kind, in declared order.
/// The `doc_type` discriminator is internal and never appears here.
pub fn fields_for(kind: EntityKind) -> &'static [FieldSpec] {
    match kind {
        EntityKind::Users => USER_FIELDS,
        EntityKind::Organizations => ORGANIZATION_FIELDS,
        EntityKind::Tickets => TICKET_FIELDS,
    }
}

/// Field names only, for listing
pub fn field_names(kind: EntityKind) -> Vec<&'static str> {
    fields_for(kind).iter().map(|f| f.name).collect()
}

/// Look up a declared field by name for the given kind
pub fn field_spec(kind: EntityKind, name: &str) -> Option<&'static FieldSpec> {
    fields_for(kind).iter().find(|f| f.name == name)
}

/// Build the combined tantivy schema spanning all three entity kinds.
///
/// Field names shared between kinds (`_id`, `name`, `tags`, ...) carry the
/// same discipline everywhere, so one physical field per name suffices.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    let text_indexing = TextFieldIndexing::default()
        .set_tokenizer(TEXT_ANALYZER)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    let text_options = TextOptions::default()
        .set_indexing_options(text_indexing)
        .set_stored();
    let stored_only = TextOptions::default().set_stored();

    let mut seen: HashSet<&'static str> = HashSet::new();
    for kind in [
        EntityKind::Users,
        EntityKind::Organizations,
        EntityKind::Tickets,
    ] {
        for spec in fields_for(kind) {
            if !seen.insert(spec.name) {
                continue;
            }
            match spec.kind {
                FieldKind::Exact => {
                    builder.add_text_field(spec.name, STRING | STORED);
                }
                FieldKind::Text => {
                    builder.add_text_field(spec.name, text_options.clone());
                }
            }
        }
    }

    builder.add_text_field(DOC_TYPE_FIELD, STRING | STORED);
    builder.add_text_field(DOC_KEY_FIELD, STRING | STORED);

    // Derived display fields from the enriched graph: stored for projection,
    // never indexed, never searchable.
    builder.add_text_field(ORGANIZATION_NAME_FIELD, stored_only.clone());
    builder.add_text_field(SUBMITTER_NAME_FIELD, stored_only.clone());
    builder.add_text_field(ASSIGNEE_NAME_FIELD, stored_only.clone());
    builder.add_text_field(ASSIGNED_SUBJECTS_FIELD, stored_only.clone());
    builder.add_text_field(SUBMITTED_SUBJECTS_FIELD, stored_only);

    builder.build()
}
