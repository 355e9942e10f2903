//! Full-text search over the enriched record graph, powered by tantivy
//!
//! The pipeline is strictly phased: the schema registry declares fields and
//! matching disciplines, the index builder turns the enriched graph into one
//! immutable in-RAM index tagged by entity kind, the query engine answers
//! single-field match queries scoped to the active kind, and the
//! projector shapes each hit into a flat display record.

mod config;
mod document;
mod error;
mod index;
mod project;
mod query;
pub mod schema;
mod service;

pub use config::SearchConfig;
pub use document::SearchDocument;
pub use error::{SearchError, SearchResult};
pub use index::SearchIndex;
pub use project::ProjectedRecord;
pub use query::QueryBuilder;
pub use schema::{field_names, fields_for, DocType, EntityKind, FieldKind, FieldSpec};
pub use service::SearchService;
