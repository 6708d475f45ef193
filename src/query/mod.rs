//! Query orchestration: remote predicate pushdown plus local post-filtering.
//!
//! Each operation pushes the equality predicates the backend can express,
//! validates every returned row, and applies the remaining predicates
//! locally. Remote failures and shape failures stay distinct so callers can
//! tell "the backend failed" from "the backend returned something we don't
//! understand".

pub mod post_filter;
pub mod store;

pub use store::{CatalogStore, FetchError, PatternOr, SelectQuery};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::search;
use crate::types::{Filters, MenuItem, Park, Restaurant};
use crate::validate;
use crate::validate::ShapeError;

/// Select expression for menu item rows with their to-one nutrition and
/// to-many allergen relations.
const MENU_ITEM_COLUMNS: &str = "*, nutritional_data (*), allergens (*)";

/// As [`MENU_ITEM_COLUMNS`], additionally expanding the owning restaurant
/// and its park for breadcrumb display.
const MENU_ITEM_DETAIL_COLUMNS: &str =
    "*, nutritional_data (*), allergens (*), restaurant:restaurants (*, park:parks (*))";

/// Hard cap on search results.
pub const SEARCH_RESULT_CAP: u32 = 50;

/// Bound on the distinct-value scan approximating the allergen-type count.
pub const ALLERGEN_SCAN_CAP: u32 = 1000;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Dashboard statistics. `allergen_type_count` is approximate: it
/// deduplicates a bounded scan, not the full table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub menu_item_count: u64,
    pub allergen_type_count: usize,
}

/// Read-only query orchestrator over a [`CatalogStore`].
pub struct CatalogReader<S> {
    store: S,
}

impl<S: CatalogStore> CatalogReader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every park, name ascending.
    pub async fn parks(&self) -> Result<Vec<Park>, QueryError> {
        debug!("listing parks");
        let rows = self
            .store
            .rows(SelectQuery::from("parks").order_asc("name"))
            .await?;
        Ok(validate::parks(&rows)?)
    }

    /// List a park's restaurants, name ascending.
    pub async fn restaurants_in_park(&self, park_id: &str) -> Result<Vec<Restaurant>, QueryError> {
        debug!(park_id, "listing restaurants");
        let rows = self
            .store
            .rows(
                SelectQuery::from("restaurants")
                    .eq("park_id", park_id)
                    .order_asc("name"),
            )
            .await?;
        Ok(validate::restaurants(&rows)?)
    }

    /// List a restaurant's menu items, name ascending. The category filter
    /// is pushed to the backend; calorie ceiling and allergen exclusion are
    /// applied locally.
    pub async fn menu_items(
        &self,
        restaurant_id: &str,
        filters: &Filters,
    ) -> Result<Vec<MenuItem>, QueryError> {
        debug!(restaurant_id, ?filters, "listing menu items");
        let mut query = SelectQuery::from("menu_items")
            .columns(MENU_ITEM_COLUMNS)
            .eq("restaurant_id", restaurant_id);
        if let Some(category) = filters.category {
            query = query.eq("category", category.as_str());
        }
        let rows = self.store.rows(query.order_asc("name")).await?;

        let items = validate::menu_items(&rows)?;
        let fetched = items.len();
        let items = post_filter::apply(items, filters);
        debug!(fetched, retained = items.len(), "post-filtered menu items");
        Ok(items)
    }

    /// Fetch a single menu item in exactly-one-row mode, eagerly joining
    /// its owning restaurant and that restaurant's owning park.
    pub async fn menu_item(&self, id: &str) -> Result<MenuItem, QueryError> {
        debug!(id, "fetching menu item");
        let row = self
            .store
            .one(
                SelectQuery::from("menu_items")
                    .columns(MENU_ITEM_DETAIL_COLUMNS)
                    .eq("id", id),
            )
            .await?;
        Ok(validate::menu_item(&row)?)
    }

    /// Free-text search across all menu items: sanitized substring match
    /// against name or description, name ascending, capped at
    /// [`SEARCH_RESULT_CAP`] rows before post-filtering.
    ///
    /// Blank input short-circuits: no query is issued and the result is
    /// empty.
    pub async fn search(
        &self,
        raw_query: &str,
        filters: &Filters,
    ) -> Result<Vec<MenuItem>, QueryError> {
        let trimmed = raw_query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = format!("%{}%", search::sanitize(trimmed));
        debug!(query = trimmed, ?filters, "searching menu items");
        let rows = self
            .store
            .rows(
                SelectQuery::from("menu_items")
                    .columns(MENU_ITEM_DETAIL_COLUMNS)
                    .or_ilike(vec!["name", "description"], pattern)
                    .order_asc("name")
                    .limit(SEARCH_RESULT_CAP),
            )
            .await?;

        let items = validate::menu_items(&rows)?;
        let fetched = items.len();
        let items = post_filter::apply(items, filters);
        debug!(fetched, retained = items.len(), "post-filtered search results");
        Ok(items)
    }

    /// Dashboard statistics: an exact menu item count and an approximate
    /// distinct allergen-type count from a bounded scan.
    pub async fn stats(&self) -> Result<CatalogStats, QueryError> {
        let menu_item_count = self.store.count("menu_items").await?;
        let rows = self
            .store
            .rows(
                SelectQuery::from("allergens")
                    .columns("allergen_type")
                    .limit(ALLERGEN_SCAN_CAP),
            )
            .await?;
        let rows = rows
            .as_array()
            .ok_or(ShapeError::ExpectedArray("allergens"))?;
        let distinct: BTreeSet<&str> = rows
            .iter()
            .filter_map(|row| row.get("allergen_type").and_then(Value::as_str))
            .collect();
        Ok(CatalogStats {
            menu_item_count,
            allergen_type_count: distinct.len(),
        })
    }
}
