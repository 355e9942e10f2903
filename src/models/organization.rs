use serde::{Deserialize, Serialize};

use crate::models::RecordId;

/// An organization as deserialized from `organizations.json`.
///
/// Organizations are join targets only; users and tickets point at them by
/// `organization_id` and nothing is resolved outward from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique numeric identifier
    #[serde(rename = "_id")]
    pub id: RecordId,

    pub url: Option<String>,

    pub external_id: Option<String>,

    pub name: Option<String>,

    #[serde(default)]
    pub domain_names: Vec<String>,

    pub created_at: Option<String>,

    pub details: Option<String>,

    pub shared_tickets: Option<bool>,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_domain_names_list() {
        let org: Organization = serde_json::from_str(
            r#"{"_id": 101, "name": "Enthaze", "domain_names": ["kage.com", "ecratic.com"]}"#,
        )
        .unwrap();
        assert_eq!(org.id.as_str(), "101");
        assert_eq!(org.domain_names.len(), 2);
    }
}
