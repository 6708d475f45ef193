use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of menu item categories the filter layer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Entree,
    Snack,
    Beverage,
    Dessert,
    Side,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Entree,
        Category::Snack,
        Category::Beverage,
        Category::Dessert,
        Category::Side,
    ];

    /// Parse a raw user-supplied value. Anything outside the closed set is
    /// `None`: invalid input degrades to "no category filter", never an
    /// error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "entree" => Some(Category::Entree),
            "snack" => Some(Category::Snack),
            "beverage" => Some(Category::Beverage),
            "dessert" => Some(Category::Dessert),
            "side" => Some(Category::Side),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entree => "entree",
            Category::Snack => "snack",
            Category::Beverage => "beverage",
            Category::Dessert => "dessert",
            Category::Side => "side",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-driven query descriptor.
///
/// Immutable value object: a new `Filters` replaces the old one rather than
/// being mutated in place. Constructed from current navigation state by the
/// filter state codec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Inclusive calorie ceiling.
    pub max_calories: Option<u32>,
    pub min_calories: Option<u32>,
    pub category: Option<Category>,
    pub max_price: Option<f64>,
    /// Allergen types to exclude; only `contains` entries trigger exclusion.
    pub exclude_allergens: Vec<String>,
}
