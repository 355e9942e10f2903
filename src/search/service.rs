//! Main search service implementation
//!
//! One service instance owns one built index scoped to one entity kind.
//! Initialization is all-or-nothing: load, enrich, build. There is no
//! not-ready service value to guard against — a failed initialization
//! yields an error instead of an instance, and a rebuild means
//! constructing a fresh instance.

use tantivy::collector::TopDocs;
use tantivy::TantivyDocument;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::graph;
use crate::search::config::SearchConfig;
use crate::search::error::{SearchError, SearchResult};
use crate::search::index::SearchIndex;
use crate::search::project::{project, ProjectedRecord};
use crate::search::query::QueryBuilder;
use crate::search::schema::{field_names, EntityKind};
use crate::store::{DataSet, FileReader};

/// In-memory relational search over one entity kind
pub struct SearchService {
    kind: EntityKind,
    index: SearchIndex,
    config: SearchConfig,
}

impl SearchService {
    /// Load the three collections, resolve the relationship graph, and
    /// build the index.
    ///
    /// Any load, parse, or build failure aborts the whole sequence; no
    /// partial state survives.
    pub async fn initialize(
        kind: EntityKind,
        reader: &dyn FileReader,
        config: &Config,
    ) -> Result<Self> {
        info!(entity_kind = %kind, "Initializing search service");

        let data = DataSet::load(reader, &config.data).await?;
        let enriched = graph::enrich(&data);
        let index = SearchIndex::build(&enriched, &config.search)?;

        Ok(Self {
            kind,
            index,
            config: config.search.clone(),
        })
    }

    /// The entity kind this service answers queries for
    pub fn entity_kind(&self) -> EntityKind {
        self.kind
    }

    /// Declared field names for the active kind, in declared order
    pub fn list_fields(&self) -> Vec<&'static str> {
        field_names(self.kind)
    }

    /// Execute a single-field match query and project the hits into
    /// display records.
    ///
    /// An empty result set is a valid outcome, not an error. A failed
    /// query leaves the service usable for subsequent calls.
    pub async fn search(&self, field: &str, value: &str) -> SearchResult<Vec<ProjectedRecord>> {
        let builder = QueryBuilder::new(self.index.schema(), self.index.index(), self.kind);
        let query = builder.build(field, value)?;

        let searcher = self.index.searcher();
        let top_docs = searcher
            .search(&*query, &TopDocs::with_limit(self.config.max_results))
            .map_err(|e| SearchError::QueryFailed(e.to_string()))?;

        // The query itself is scoped to the active kind, so every hit
        // within the limit is an in-type hit.
        let mut results = Vec::new();
        for (_score, address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(address)
                .map_err(|e| SearchError::QueryFailed(e.to_string()))?;
            results.push(project(self.kind, &doc, self.index.schema()));
        }

        debug!(
            field,
            value,
            hits = results.len(),
            entity_kind = %self.kind,
            "Query executed"
        );

        Ok(results)
    }
}
