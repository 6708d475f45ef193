#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};

use menu_core::query::{CatalogStore, FetchError, SelectQuery};

/// In-memory `CatalogStore` double that interprets the query descriptor the
/// core builds: equality predicates, escaped-pattern OR matching, ascending
/// order, and the row limit.
#[derive(Default)]
pub struct MemoryStore {
    pub parks: Vec<Value>,
    pub restaurants: Vec<Value>,
    pub menu_items: Vec<Value>,
    pub allergens: Vec<Value>,
    /// When set, every request fails with this message.
    pub fail_with: Option<String>,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn table(&self, name: &str) -> Vec<Value> {
        match name {
            "parks" => self.parks.clone(),
            "restaurants" => self.restaurants.clone(),
            "menu_items" => self.menu_items.clone(),
            "allergens" => self.allergens.clone(),
            _ => Vec::new(),
        }
    }

    fn select(&self, query: &SelectQuery) -> Result<Vec<Value>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            return Err(FetchError::Backend(message.clone()));
        }

        let mut rows = self.table(query.table);
        for (column, expected) in &query.eq {
            rows.retain(|row| row.get(*column).and_then(Value::as_str) == Some(expected.as_str()));
        }
        if let Some(or) = &query.or_ilike {
            rows.retain(|row| {
                or.columns.iter().any(|column| {
                    row.get(*column)
                        .and_then(Value::as_str)
                        .is_some_and(|text| ilike_matches(&or.pattern, text))
                })
            });
        }
        if let Some(column) = query.order_by {
            rows.sort_by_key(|row| {
                row.get(column)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn rows(&self, query: SelectQuery) -> Result<Value, FetchError> {
        self.select(&query).map(Value::Array)
    }

    async fn one(&self, query: SelectQuery) -> Result<Value, FetchError> {
        let mut rows = self.select(&query)?;
        if rows.len() != 1 {
            return Err(FetchError::RowCount(rows.len()));
        }
        Ok(rows.remove(0))
    }

    async fn count(&self, table: &'static str) -> Result<u64, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            return Err(FetchError::Backend(message.clone()));
        }
        Ok(self.table(table).len() as u64)
    }
}

#[async_trait]
impl<'a> CatalogStore for &'a MemoryStore {
    async fn rows(&self, query: SelectQuery) -> Result<Value, FetchError> {
        <MemoryStore as CatalogStore>::rows(self, query).await
    }

    async fn one(&self, query: SelectQuery) -> Result<Value, FetchError> {
        <MemoryStore as CatalogStore>::one(self, query).await
    }

    async fn count(&self, table: &'static str) -> Result<u64, FetchError> {
        <MemoryStore as CatalogStore>::count(self, table).await
    }
}

enum PatternTok {
    Lit(char),
    Any,
    One,
}

fn pattern_toks(pattern: &str) -> Vec<PatternTok> {
    let mut toks = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    toks.push(PatternTok::Lit(next.to_ascii_lowercase()));
                }
            }
            '%' => toks.push(PatternTok::Any),
            '_' => toks.push(PatternTok::One),
            other => toks.push(PatternTok::Lit(other.to_ascii_lowercase())),
        }
    }
    toks
}

fn toks_match(toks: &[PatternTok], text: &[char]) -> bool {
    match toks.split_first() {
        None => text.is_empty(),
        Some((PatternTok::Any, rest)) => (0..=text.len()).any(|skip| toks_match(rest, &text[skip..])),
        Some((PatternTok::One, rest)) => !text.is_empty() && toks_match(rest, &text[1..]),
        Some((PatternTok::Lit(c), rest)) => {
            text.first() == Some(c) && toks_match(rest, &text[1..])
        }
    }
}

/// Case-insensitive pattern match with `\` escapes, `%` any-sequence, and
/// `_` any-single-character, mirroring the backend's ilike operator.
pub fn ilike_matches(pattern: &str, text: &str) -> bool {
    let text: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    toks_match(&pattern_toks(pattern), &text)
}

pub fn park_row(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "location": "Lake Buena Vista, FL",
        "timezone": "America/New_York",
    })
}

pub fn restaurant_row(id: &str, park_id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "park_id": park_id,
        "name": name,
        "location_in_park": "Fantasyland",
        "cuisine_type": "American",
    })
}

pub fn item_row(id: &str, restaurant_id: &str, name: &str, description: Option<&str>) -> Value {
    json!({
        "id": id,
        "restaurant_id": restaurant_id,
        "name": name,
        "description": description,
        "price": "9.99",
        "category": "entree",
        "is_seasonal": false,
        "photo_url": null,
        "nutritional_data": null,
        "allergens": [],
    })
}

pub fn with_category(mut row: Value, category: &str) -> Value {
    row["category"] = json!(category);
    row
}

pub fn with_nutrition(mut row: Value, calories: Option<f64>) -> Value {
    let id = row["id"].as_str().expect("fixture id").to_string();
    row["nutritional_data"] = json!({
        "id": format!("{id}-nutrition"),
        "menu_item_id": id,
        "source": "official",
        "calories": calories,
        "confidence_score": 88,
    });
    row
}

pub fn with_allergen(mut row: Value, allergen_type: &str, severity: &str) -> Value {
    let id = row["id"].as_str().expect("fixture id").to_string();
    let count = row["allergens"].as_array().map_or(0, Vec::len);
    let entry = json!({
        "id": format!("{id}-allergen-{count}"),
        "menu_item_id": id,
        "allergen_type": allergen_type,
        "severity": severity,
    });
    row["allergens"]
        .as_array_mut()
        .expect("fixture allergens")
        .push(entry);
    row
}

pub fn with_restaurant(mut row: Value, restaurant: Value) -> Value {
    row["restaurant"] = restaurant;
    row
}
