//! helpdesk-search: ephemeral in-memory relational search over help desk
//! records.
//!
//! Three JSON collections (users, organizations, tickets) are loaded,
//! their foreign keys resolved into an enriched graph, and the result
//! indexed into one in-RAM full-text index. Queries match a single field
//! against a value and return flat, display-ready records scoped to the
//! entity kind being searched.

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod search;
pub mod store;
