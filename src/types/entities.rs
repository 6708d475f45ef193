use serde::{Deserialize, Serialize};

/// A park. Root of the catalog hierarchy; owns zero-or-more restaurants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    pub id: String,
    pub name: String,
    pub location: String,
    pub timezone: String,
}

/// A restaurant inside a park.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub park_id: String,
    pub name: String,
    #[serde(default)]
    pub location_in_park: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    /// Owning park, populated only by relation-expanded fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub park: Option<Park>,
}

/// A menu item together with its to-one nutrition relation and to-many
/// allergen relation. Every query shape returns this joined form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Always a number internally; string-encoded decimals from the backend
    /// are parsed once at validation time and never re-parsed downstream.
    #[serde(default)]
    pub price: Option<f64>,
    /// Raw category tag as stored by the backend. The closed set the filter
    /// layer accepts lives in [`super::Category`].
    pub category: String,
    pub is_seasonal: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// At most one record, never many.
    #[serde(rename = "nutritional_data", default)]
    pub nutrition: Option<NutritionalData>,
    /// Defaults to empty, never null, when absent from a response.
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    /// Owning restaurant (with its park), populated only by eager-join
    /// fetches for breadcrumb display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
}

/// Nutrition facts for a single menu item.
///
/// Each nutrient is present or explicitly absent; there is no
/// undefined-vs-null ambiguity once a record has been validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalData {
    pub id: String,
    pub menu_item_id: String,
    /// Provenance tag; the backend's closed set is
    /// `official | crowdsourced | api_lookup`.
    pub source: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub saturated_fat: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub cholesterol: Option<f64>,
    /// 0–100 integer.
    pub confidence_score: i64,
}

impl NutritionalData {
    /// Records below this confidence are displayed as estimated values.
    pub fn is_estimated(&self) -> bool {
        self.confidence_score < 70
    }
}

/// An allergen entry attached to a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allergen {
    pub id: String,
    pub menu_item_id: String,
    /// Free-text tag, compared case-sensitively by the exclusion filter.
    pub allergen_type: String,
    /// `contains` (definite) or `may_contain` (possible cross-contact).
    pub severity: String,
}

impl Allergen {
    /// True only for definite `contains` entries; `may_contain` never
    /// triggers exclusion filtering.
    pub fn is_definite(&self) -> bool {
        self.severity == "contains"
    }
}
