use serde::{Deserialize, Serialize};

use crate::models::RecordId;

/// A support ticket as deserialized from `tickets.json`.
///
/// Tickets carry three foreign keys: the organization they belong to and the
/// submitting and assigned users. Any of them may be null or missing, which
/// leaves the relationship unresolved rather than failing the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique UUID-shaped identifier
    #[serde(rename = "_id")]
    pub id: RecordId,

    pub url: Option<String>,

    pub external_id: Option<String>,

    pub created_at: Option<String>,

    /// Ticket category ("incident", "problem", "question", "task")
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,

    pub subject: Option<String>,

    pub description: Option<String>,

    pub priority: Option<String>,

    pub status: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub has_incidents: Option<bool>,

    pub due_at: Option<String>,

    pub via: Option<String>,

    /// User who opened the ticket
    pub submitter_id: Option<RecordId>,

    /// User the ticket is assigned to
    pub assignee_id: Option<RecordId>,

    /// Organization the ticket belongs to
    pub organization_id: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_type_keyword_field() {
        let ticket: Ticket = serde_json::from_str(
            r#"{
                "_id": "436bf9b0-1147-4c0a-8439-6f79833bff5b",
                "type": "incident",
                "subject": "A Catastrophe in Korea",
                "submitter_id": 38,
                "assignee_id": 24
            }"#,
        )
        .unwrap();
        assert_eq!(ticket.ticket_type.as_deref(), Some("incident"));
        assert_eq!(ticket.submitter_id.as_ref().unwrap().as_str(), "38");
        assert!(ticket.organization_id.is_none());
    }
}
