use serde::{Deserialize, Serialize};

use crate::models::RecordId;

/// A help desk user as deserialized from `users.json`.
///
/// Every attribute except `_id` may be missing from the source data, so the
/// fields are optional rather than defaulted to empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric identifier
    #[serde(rename = "_id")]
    pub id: RecordId,

    pub url: Option<String>,

    pub external_id: Option<String>,

    pub name: Option<String>,

    pub alias: Option<String>,

    pub created_at: Option<String>,

    pub active: Option<bool>,

    pub shared: Option<bool>,

    pub verified: Option<bool>,

    pub locale: Option<String>,

    pub timezone: Option<String>,

    pub last_login_at: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub signature: Option<String>,

    /// Organization this user belongs to
    pub organization_id: Option<RecordId>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub suspended: Option<bool>,

    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"_id": 7, "name": "Lou Schmidt"}"#).unwrap();
        assert_eq!(user.id.as_str(), "7");
        assert_eq!(user.name.as_deref(), Some("Lou Schmidt"));
        assert!(user.organization_id.is_none());
        assert!(user.tags.is_empty());
    }
}
