//! Shared fixtures for integration tests
//!
//! A small three-collection data set wired so every relationship shape
//! occurs at least once: resolved and dangling foreign keys, users with
//! multiple submitted/assigned tickets, and a tag value shared between a
//! user and a ticket (to exercise type scoping on the shared index).

use async_trait::async_trait;
use std::path::Path;

use helpdesk_search::config::Config;
use helpdesk_search::search::{EntityKind, SearchService};
use helpdesk_search::store::FileReader;

pub const USERS_JSON: &str = r#"[
  {
    "_id": 1,
    "url": "http://support.initech.com/api/v2/users/1.json",
    "external_id": "74341f74-9c79-49d5-9611-87ef9b6eb75f",
    "name": "Francisca Rasmussen",
    "alias": "Miss Coffey",
    "created_at": "2016-04-15T05:19:46 -10:00",
    "active": true,
    "verified": true,
    "shared": false,
    "locale": "en-AU",
    "timezone": "Sri Lanka",
    "last_login_at": "2013-08-04T01:03:27 -10:00",
    "email": "coffeyrasmussen@flotonic.com",
    "phone": "8335-422-718",
    "signature": "Don't Worry Be Happy!",
    "organization_id": 101,
    "tags": ["Springville", "Sutton"],
    "suspended": true,
    "role": "admin"
  },
  {
    "_id": 2,
    "name": "Cross Barlow",
    "email": "crossbarlow@flotonic.com",
    "active": true,
    "verified": false,
    "organization_id": 102,
    "tags": ["Ohio"],
    "role": "agent"
  },
  {
    "_id": 3,
    "name": "Ingrid Wagner",
    "active": false,
    "organization_id": 999,
    "role": "end-user"
  }
]"#;

pub const ORGANIZATIONS_JSON: &str = r#"[
  {
    "_id": 101,
    "url": "http://support.initech.com/api/v2/organizations/101.json",
    "external_id": "9270ed79-35eb-4a38-a46f-35725197ea8d",
    "name": "Enthaze",
    "domain_names": ["kage.com", "ecratic.com"],
    "created_at": "2016-05-21T11:10:28 -10:00",
    "details": "MegaCorp",
    "shared_tickets": false,
    "tags": ["Fulton", "West"]
  },
  {
    "_id": 102,
    "name": "Nutralab",
    "domain_names": ["trollery.com"],
    "shared_tickets": true,
    "tags": ["Cherry"]
  }
]"#;

pub const TICKETS_JSON: &str = r#"[
  {
    "_id": "436bf9b0-1147-4c0a-8439-6f79833bff5b",
    "url": "http://support.initech.com/api/v2/tickets/436bf9b0.json",
    "external_id": "9210cdc9-4bee-485f-a078-35396cd74063",
    "created_at": "2016-04-28T11:19:34 -10:00",
    "type": "incident",
    "subject": "A Catastrophe in Korea",
    "description": "Nostrud ad sit velit cupidatat laboris ipsum nisi.",
    "priority": "high",
    "status": "pending",
    "tags": ["Ohio", "Pennsylvania"],
    "has_incidents": false,
    "due_at": "2016-07-31T02:37:50 -10:00",
    "via": "web",
    "submitter_id": 1,
    "assignee_id": 2,
    "organization_id": 101
  },
  {
    "_id": "1a227508-9f39-427c-8f57-1b72f3fab87c",
    "type": "problem",
    "subject": "A Problem in Morocco",
    "priority": "urgent",
    "status": "open",
    "via": "chat",
    "submitter_id": 2,
    "assignee_id": 1,
    "organization_id": 101
  },
  {
    "_id": "2217c7dc-7371-4401-8738-0a8a8aedc08d",
    "type": "problem",
    "subject": "A Problem in Gabon",
    "priority": "normal",
    "status": "closed",
    "via": "voice",
    "submitter_id": 1,
    "assignee_id": 999
  },
  {
    "_id": "87db32c5-76a3-4069-954c-7d2b6e76c5c0",
    "type": "task",
    "subject": "A Drama in Germany",
    "status": "hold",
    "via": "web",
    "submitter_id": 3,
    "assignee_id": 1
  }
]"#;

/// Serves the fixture collections by file name, no filesystem involved
pub struct FixtureReader;

#[async_trait]
impl FileReader for FixtureReader {
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        match name {
            "users.json" => Ok(USERS_JSON.as_bytes().to_vec()),
            "organizations.json" => Ok(ORGANIZATIONS_JSON.as_bytes().to_vec()),
            "tickets.json" => Ok(TICKETS_JSON.as_bytes().to_vec()),
            other => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no fixture named {}", other),
            )),
        }
    }
}

/// An initialized service over the fixture data for the given kind
pub async fn fixture_service(kind: EntityKind) -> SearchService {
    SearchService::initialize(kind, &FixtureReader, &Config::default())
        .await
        .unwrap()
}
