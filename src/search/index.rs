//! Index construction
//!
//! Builds one immutable in-RAM tantivy index spanning all three enriched
//! entity collections. Each document gets a fresh UUID surrogate key; the
//! business id stays queryable as an ordinary exact field. Once built, only
//! a reader handle is kept — there is no update path, a rebuild means a new
//! service instance.

use std::time::Instant;
use tantivy::schema::Schema;
use tantivy::tokenizer::{
    Language, LowerCaser, SimpleTokenizer, Stemmer, StopWordFilter, TextAnalyzer,
};
use tantivy::{Index, IndexReader, IndexWriter, TantivyDocument};
use tracing::info;
use uuid::Uuid;

use crate::graph::EnrichedGraph;
use crate::search::config::SearchConfig;
use crate::search::document::SearchDocument;
use crate::search::error::{SearchError, SearchResult};
use crate::search::schema::{build_schema, DOC_KEY_FIELD, TEXT_ANALYZER};

/// The built, read-only search index
pub struct SearchIndex {
    index: Index,
    schema: Schema,
    reader: IndexReader,
}

impl SearchIndex {
    /// Build the index over an enriched graph.
    ///
    /// Any tantivy failure aborts the build; a partially filled index is
    /// never returned.
    pub fn build(graph: &EnrichedGraph, config: &SearchConfig) -> SearchResult<Self> {
        let start = Instant::now();

        let schema = build_schema();
        let index = Index::create_in_ram(schema.clone());
        index
            .tokenizers()
            .register(TEXT_ANALYZER, english_analyzer()?);

        let mut writer: IndexWriter = index
            .writer(config.writer_heap_size)
            .map_err(|e| SearchError::BuildFailed(e.to_string()))?;

        let doc_key = schema
            .get_field(DOC_KEY_FIELD)
            .map_err(|e| SearchError::BuildFailed(e.to_string()))?;

        let mut indexed = 0usize;
        for user in &graph.users {
            add_document(&mut writer, user.to_tantivy_doc(&schema), doc_key)?;
            indexed += 1;
        }
        for org in &graph.organizations {
            add_document(&mut writer, org.to_tantivy_doc(&schema), doc_key)?;
            indexed += 1;
        }
        for ticket in &graph.tickets {
            add_document(&mut writer, ticket.to_tantivy_doc(&schema), doc_key)?;
            indexed += 1;
        }

        writer
            .commit()
            .map_err(|e| SearchError::BuildFailed(e.to_string()))?;

        let reader = index
            .reader()
            .map_err(|e| SearchError::BuildFailed(e.to_string()))?;

        info!(
            documents = indexed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Search index built"
        );

        Ok(Self {
            index,
            schema,
            reader,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn searcher(&self) -> tantivy::Searcher {
        self.reader.searcher()
    }
}

fn add_document(
    writer: &mut IndexWriter,
    mut doc: TantivyDocument,
    doc_key: tantivy::schema::Field,
) -> SearchResult<()> {
    doc.add_text(doc_key, Uuid::new_v4().to_string());
    writer
        .add_document(doc)
        .map_err(|e| SearchError::IndexingFailed(e.to_string()))?;
    Ok(())
}

/// Simple tokenization + lowercase + English stopwords + English stemming
pub(crate) fn english_analyzer() -> SearchResult<TextAnalyzer> {
    let stop_words = StopWordFilter::new(Language::English)
        .ok_or_else(|| SearchError::BuildFailed("missing English stopword list".to_string()))?;

    Ok(TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(stop_words)
        .filter(Stemmer::new(Language::English))
        .build())
}
