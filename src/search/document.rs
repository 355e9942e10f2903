//! Conversion of enriched records into index documents
//!
//! Every registry field is written in its exact string form (numbers keep
//! their source digits, booleans become `true`/`false`) so that exact-token
//! queries compare against the full raw value. Graph edges that survive
//! indexing land in store-only fields the projector reads back.

use tantivy::schema::Schema;
use tantivy::TantivyDocument;

use crate::graph::{EnrichedOrganization, EnrichedTicket, EnrichedUser};
use crate::models::RecordId;
use crate::search::schema::{
    DocType, ASSIGNED_SUBJECTS_FIELD, ASSIGNEE_NAME_FIELD, DOC_TYPE_FIELD,
    ORGANIZATION_NAME_FIELD, SUBMITTED_SUBJECTS_FIELD, SUBMITTER_NAME_FIELD,
};

/// An enriched record that can be turned into one index document
pub trait SearchDocument {
    /// The discriminator stamped on the document
    fn doc_type(&self) -> DocType;

    /// Convert to a tantivy document (without the surrogate key, which the
    /// index builder assigns)
    fn to_tantivy_doc(&self, schema: &Schema) -> TantivyDocument;
}

impl SearchDocument for EnrichedUser {
    fn doc_type(&self) -> DocType {
        DocType::User
    }

    fn to_tantivy_doc(&self, schema: &Schema) -> TantivyDocument {
        let mut doc = TantivyDocument::new();
        add_doc_type(&mut doc, schema, self.doc_type());

        let u = &self.record;
        add_id(&mut doc, schema, "_id", &u.id);
        add_opt(&mut doc, schema, "url", &u.url);
        add_opt(&mut doc, schema, "external_id", &u.external_id);
        add_opt(&mut doc, schema, "name", &u.name);
        add_opt(&mut doc, schema, "alias", &u.alias);
        add_opt(&mut doc, schema, "created_at", &u.created_at);
        add_flag(&mut doc, schema, "active", u.active);
        add_flag(&mut doc, schema, "shared", u.shared);
        add_flag(&mut doc, schema, "verified", u.verified);
        add_opt(&mut doc, schema, "locale", &u.locale);
        add_opt(&mut doc, schema, "timezone", &u.timezone);
        add_opt(&mut doc, schema, "last_login_at", &u.last_login_at);
        add_opt(&mut doc, schema, "email", &u.email);
        add_opt(&mut doc, schema, "phone", &u.phone);
        add_opt(&mut doc, schema, "signature", &u.signature);
        add_opt_id(&mut doc, schema, "organization_id", &u.organization_id);
        add_many(&mut doc, schema, "tags", &u.tags);
        add_flag(&mut doc, schema, "suspended", u.suspended);
        add_opt(&mut doc, schema, "role", &u.role);

        // Graph edges carried for projection
        if let Some(org) = &self.organization {
            add_opt(&mut doc, schema, ORGANIZATION_NAME_FIELD, &org.name);
        }
        let assigned: Vec<String> = self
            .assigned_tickets
            .iter()
            .filter_map(|t| t.subject.clone())
            .collect();
        add_many(&mut doc, schema, ASSIGNED_SUBJECTS_FIELD, &assigned);
        let submitted: Vec<String> = self
            .submitted_tickets
            .iter()
            .filter_map(|t| t.subject.clone())
            .collect();
        add_many(&mut doc, schema, SUBMITTED_SUBJECTS_FIELD, &submitted);

        doc
    }
}

impl SearchDocument for EnrichedOrganization {
    fn doc_type(&self) -> DocType {
        DocType::Organization
    }

    fn to_tantivy_doc(&self, schema: &Schema) -> TantivyDocument {
        let mut doc = TantivyDocument::new();
        add_doc_type(&mut doc, schema, self.doc_type());

        let o = &self.record;
        add_id(&mut doc, schema, "_id", &o.id);
        add_opt(&mut doc, schema, "url", &o.url);
        add_opt(&mut doc, schema, "external_id", &o.external_id);
        add_opt(&mut doc, schema, "name", &o.name);
        add_many(&mut doc, schema, "domain_names", &o.domain_names);
        add_opt(&mut doc, schema, "created_at", &o.created_at);
        add_opt(&mut doc, schema, "details", &o.details);
        add_flag(&mut doc, schema, "shared_tickets", o.shared_tickets);
        add_many(&mut doc, schema, "tags", &o.tags);

        doc
    }
}

impl SearchDocument for EnrichedTicket {
    fn doc_type(&self) -> DocType {
        DocType::Ticket
    }

    fn to_tantivy_doc(&self, schema: &Schema) -> TantivyDocument {
        let mut doc = TantivyDocument::new();
        add_doc_type(&mut doc, schema, self.doc_type());

        let t = &self.record;
        add_id(&mut doc, schema, "_id", &t.id);
        add_opt(&mut doc, schema, "url", &t.url);
        add_opt(&mut doc, schema, "external_id", &t.external_id);
        add_opt(&mut doc, schema, "created_at", &t.created_at);
        add_opt(&mut doc, schema, "type", &t.ticket_type);
        add_opt(&mut doc, schema, "subject", &t.subject);
        add_opt(&mut doc, schema, "description", &t.description);
        add_opt(&mut doc, schema, "priority", &t.priority);
        add_opt(&mut doc, schema, "status", &t.status);
        add_many(&mut doc, schema, "tags", &t.tags);
        add_flag(&mut doc, schema, "has_incidents", t.has_incidents);
        add_opt(&mut doc, schema, "due_at", &t.due_at);
        add_opt(&mut doc, schema, "via", &t.via);
        add_opt_id(&mut doc, schema, "submitter_id", &t.submitter_id);
        add_opt_id(&mut doc, schema, "assignee_id", &t.assignee_id);
        add_opt_id(&mut doc, schema, "organization_id", &t.organization_id);

        // Graph edges carried for projection
        if let Some(org) = &self.organization {
            add_opt(&mut doc, schema, ORGANIZATION_NAME_FIELD, &org.name);
        }
        if let Some(submitter) = &self.submitter {
            add_opt(&mut doc, schema, SUBMITTER_NAME_FIELD, &submitter.name);
        }
        if let Some(assignee) = &self.assignee {
            add_opt(&mut doc, schema, ASSIGNEE_NAME_FIELD, &assignee.name);
        }

        doc
    }
}

fn add_doc_type(doc: &mut TantivyDocument, schema: &Schema, doc_type: DocType) {
    if let Ok(field) = schema.get_field(DOC_TYPE_FIELD) {
        doc.add_text(field, doc_type.to_string());
    }
}

fn add_id(doc: &mut TantivyDocument, schema: &Schema, name: &str, id: &RecordId) {
    if let Ok(field) = schema.get_field(name) {
        doc.add_text(field, id.as_str());
    }
}

fn add_opt_id(doc: &mut TantivyDocument, schema: &Schema, name: &str, id: &Option<RecordId>) {
    if let Some(id) = id {
        add_id(doc, schema, name, id);
    }
}

fn add_opt(doc: &mut TantivyDocument, schema: &Schema, name: &str, value: &Option<String>) {
    if let (Some(value), Ok(field)) = (value, schema.get_field(name)) {
        doc.add_text(field, value);
    }
}

fn add_flag(doc: &mut TantivyDocument, schema: &Schema, name: &str, value: Option<bool>) {
    if let (Some(value), Ok(field)) = (value, schema.get_field(name)) {
        doc.add_text(field, if value { "true" } else { "false" });
    }
}

fn add_many(doc: &mut TantivyDocument, schema: &Schema, name: &str, values: &[String]) {
    if let Ok(field) = schema.get_field(name) {
        for value in values {
            doc.add_text(field, value);
        }
    }
}
