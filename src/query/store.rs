use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure at the remote-store boundary.
///
/// Propagated verbatim to the caller; no retry policy lives at this layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("backend request failed: {0}")]
    Backend(String),
    #[error("expected exactly one row, found {0}")]
    RowCount(usize),
}

/// Logical OR of case-insensitive pattern matches over several columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOr {
    pub columns: Vec<&'static str>,
    /// Pattern with user input already escaped; see [`crate::search::sanitize`].
    pub pattern: String,
}

/// Query-by-example descriptor for a single select round trip.
///
/// `columns` is the select expression: all columns (`*`) or a relation
/// expansion such as `*, nutritional_data (*), allergens (*)`, retrieving a
/// bounded set of related rows in the same round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub table: &'static str,
    pub columns: &'static str,
    /// Equality predicates, pushed to the backend.
    pub eq: Vec<(&'static str, String)>,
    pub or_ilike: Option<PatternOr>,
    /// Ascending order-by column.
    pub order_by: Option<&'static str>,
    pub limit: Option<u32>,
}

impl SelectQuery {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            columns: "*",
            eq: Vec::new(),
            or_ilike: None,
            order_by: None,
            limit: None,
        }
    }

    pub fn columns(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    pub fn eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.eq.push((column, value.into()));
        self
    }

    pub fn or_ilike(mut self, columns: Vec<&'static str>, pattern: impl Into<String>) -> Self {
        self.or_ilike = Some(PatternOr {
            columns,
            pattern: pattern.into(),
        });
        self
    }

    pub fn order_asc(mut self, column: &'static str) -> Self {
        self.order_by = Some(column);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Narrow contract over the remote relational backend.
///
/// Implementations translate the descriptor into their own wire protocol;
/// the core consumes the boundary, it never defines the transport.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Multi-row retrieval.
    async fn rows(&self, query: SelectQuery) -> Result<Value, FetchError>;

    /// Exactly-one-row retrieval; fails if zero or multiple rows match.
    async fn one(&self, query: SelectQuery) -> Result<Value, FetchError>;

    /// Aggregate row count without row data.
    async fn count(&self, table: &'static str) -> Result<u64, FetchError>;
}
