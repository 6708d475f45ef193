use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::{Category, Filters};

/// Canonical form of the filter fields that participate in cache identity.
///
/// Logically-equal filters must canonicalize identically: absent fields
/// become explicit `None`, and the exclusion set collapses to a
/// sorted-then-joined string so ordering differences cannot split the key
/// space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FiltersKey {
    pub category: Option<Category>,
    pub max_calories: Option<u32>,
    pub exclude: String,
}

impl FiltersKey {
    pub fn of(filters: &Filters) -> Self {
        let mut excluded: Vec<&str> = filters
            .exclude_allergens
            .iter()
            .map(String::as_str)
            .collect();
        excluded.sort_unstable();
        Self {
            category: filters.category,
            max_calories: filters.max_calories,
            exclude: excluded.join(","),
        }
    }

    fn write_canonical(&self, out: &mut String) {
        push_field(
            out,
            self.category.as_ref().map_or("null", Category::as_str),
        );
        match self.max_calories {
            Some(ceiling) => push_field(out, &ceiling.to_string()),
            None => push_field(out, "null"),
        }
        push_field(out, &self.exclude);
    }
}

/// Identity of a logical query: operation, scoping parameter, canonical
/// filters.
///
/// Two keys with the same operation, same scoping parameter, and
/// canonically-equal filters compare equal; any difference in scope or
/// canonical filter content yields a different key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKey {
    Parks,
    Restaurants { park: String },
    MenuItems { restaurant: String, filters: FiltersKey },
    MenuItem { item: String },
    Search { query: String, filters: FiltersKey },
    Stats,
}

impl QueryKey {
    pub fn parks() -> Self {
        QueryKey::Parks
    }

    pub fn restaurants(park_id: &str) -> Self {
        QueryKey::Restaurants {
            park: park_id.to_string(),
        }
    }

    pub fn menu_items(restaurant_id: &str, filters: &Filters) -> Self {
        QueryKey::MenuItems {
            restaurant: restaurant_id.to_string(),
            filters: FiltersKey::of(filters),
        }
    }

    pub fn menu_item(id: &str) -> Self {
        QueryKey::MenuItem {
            item: id.to_string(),
        }
    }

    pub fn search(query: &str, filters: &Filters) -> Self {
        QueryKey::Search {
            query: query.to_string(),
            filters: FiltersKey::of(filters),
        }
    }

    pub fn stats() -> Self {
        QueryKey::Stats
    }

    /// Stable `sha256:<hex>` fingerprint of the canonical key, for layers
    /// that want a flat string identity.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical().as_bytes());
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }

    /// Length-prefixed field rendering, so no field content can collide
    /// with the field framing.
    fn canonical(&self) -> String {
        let mut out = String::new();
        match self {
            QueryKey::Parks => push_field(&mut out, "parks"),
            QueryKey::Restaurants { park } => {
                push_field(&mut out, "restaurants");
                push_field(&mut out, park);
            }
            QueryKey::MenuItems { restaurant, filters } => {
                push_field(&mut out, "menu_items");
                push_field(&mut out, restaurant);
                filters.write_canonical(&mut out);
            }
            QueryKey::MenuItem { item } => {
                push_field(&mut out, "menu_item");
                push_field(&mut out, item);
            }
            QueryKey::Search { query, filters } => {
                push_field(&mut out, "search");
                push_field(&mut out, query);
                filters.write_canonical(&mut out);
            }
            QueryKey::Stats => push_field(&mut out, "stats"),
        }
        out
    }
}

fn push_field(out: &mut String, field: &str) {
    out.push_str(&field.len().to_string());
    out.push(':');
    out.push_str(field);
}
