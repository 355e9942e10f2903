//! Single-field query construction
//!
//! A query targets exactly one declared field of the active entity kind.
//! Exact-token fields become a raw term lookup (case- and whitespace-
//! preserving full-value equality); tokenized-text fields are analyzed with
//! the field's own analyzer and match any contained token. The value is
//! always literal text: punctuation, quotes, and operator words carry no
//! query syntax and can never reach another field. Every query also carries
//! a mandatory discriminator term so only records of the active kind match.

use tantivy::query::{BooleanQuery, Occur, Query, TermQuery};
use tantivy::schema::{Field, IndexRecordOption, Schema};
use tantivy::{Index, Term};

use crate::search::error::{SearchError, SearchResult};
use crate::search::schema::{field_spec, EntityKind, FieldKind, DOC_TYPE_FIELD};

/// Builds tantivy queries scoped to one entity kind's declared fields
pub struct QueryBuilder<'a> {
    schema: &'a Schema,
    index: &'a Index,
    kind: EntityKind,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(schema: &'a Schema, index: &'a Index, kind: EntityKind) -> Self {
        Self {
            schema,
            index,
            kind,
        }
    }

    /// Build a query for one field and value.
    ///
    /// The field must be declared for the active kind; anything else is a
    /// query error, not a silent empty result. A value whose tokens all
    /// normalize away matches nothing.
    pub fn build(&self, field_name: &str, value: &str) -> SearchResult<Box<dyn Query>> {
        let spec = field_spec(self.kind, field_name).ok_or_else(|| {
            SearchError::UnknownField(format!("{} has no field {}", self.kind, field_name))
        })?;

        let field = self
            .schema
            .get_field(spec.name)
            .map_err(|e| SearchError::QueryFailed(e.to_string()))?;

        let field_query: Box<dyn Query> = match spec.kind {
            FieldKind::Exact => {
                let term = Term::from_field_text(field, value);
                Box::new(TermQuery::new(term, IndexRecordOption::Basic))
            }
            FieldKind::Text => self.text_query(field, value)?,
        };

        let doc_type = self
            .schema
            .get_field(DOC_TYPE_FIELD)
            .map_err(|e| SearchError::QueryFailed(e.to_string()))?;
        let doc_type_query = TermQuery::new(
            Term::from_field_text(doc_type, &self.kind.doc_type().to_string()),
            IndexRecordOption::Basic,
        );

        Ok(Box::new(BooleanQuery::new(vec![
            (Occur::Must, field_query),
            (Occur::Must, Box::new(doc_type_query)),
        ])))
    }

    /// Token containment on one field: the value goes through the field's
    /// registered analyzer, producing one term per surviving token, joined
    /// as any-of.
    fn text_query(&self, field: Field, value: &str) -> SearchResult<Box<dyn Query>> {
        let mut analyzer = self
            .index
            .tokenizer_for_field(field)
            .map_err(|e| SearchError::QueryFailed(e.to_string()))?;

        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
        analyzer.token_stream(value).process(&mut |token| {
            let term = Term::from_field_text(field, &token.text);
            clauses.push((
                Occur::Should,
                Box::new(TermQuery::new(term, IndexRecordOption::WithFreqs)),
            ));
        });

        Ok(Box::new(BooleanQuery::new(clauses)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::index::english_analyzer;
    use crate::search::schema::{build_schema, TEXT_ANALYZER};
    use tantivy::Index;

    fn builder_fixture() -> (Schema, Index) {
        let schema = build_schema();
        let index = Index::create_in_ram(schema.clone());
        index
            .tokenizers()
            .register(TEXT_ANALYZER, english_analyzer().unwrap());
        (schema, index)
    }

    #[test]
    fn unknown_field_is_rejected() {
        let (schema, index) = builder_fixture();
        let builder = QueryBuilder::new(&schema, &index, EntityKind::Users);
        let err = builder.build("severity", "P0").unwrap_err();
        assert!(matches!(err, SearchError::UnknownField(_)));
    }

    #[test]
    fn field_declared_for_other_kind_only_is_rejected() {
        let (schema, index) = builder_fixture();
        // "subject" exists in the combined schema but only tickets declare it
        let builder = QueryBuilder::new(&schema, &index, EntityKind::Users);
        assert!(builder.build("subject", "help").is_err());

        let builder = QueryBuilder::new(&schema, &index, EntityKind::Tickets);
        assert!(builder.build("subject", "help").is_ok());
    }

    #[test]
    fn exact_field_builds_a_term_query() {
        let (schema, index) = builder_fixture();
        let builder = QueryBuilder::new(&schema, &index, EntityKind::Users);
        assert!(builder.build("_id", "71").is_ok());
    }

    #[test]
    fn text_value_with_operator_characters_still_builds() {
        let (schema, index) = builder_fixture();
        let builder = QueryBuilder::new(&schema, &index, EntityKind::Users);
        assert!(builder.build("name", "tags:Ohio").is_ok());
        assert!(builder.build("name", "\"unbalanced quote").is_ok());
        assert!(builder.build("name", "alpha AND beta").is_ok());
    }

    #[test]
    fn value_that_normalizes_away_builds_a_match_nothing_query() {
        let (schema, index) = builder_fixture();
        let builder = QueryBuilder::new(&schema, &index, EntityKind::Tickets);
        // "the" is a stop word, punctuation yields no tokens
        assert!(builder.build("subject", "the").is_ok());
        assert!(builder.build("subject", "...").is_ok());
    }
}
