use crate::types::{Category, Filters};

use super::params::ParamMap;

pub const PARAM_MAX_CALORIES: &str = "maxCalories";
pub const PARAM_EXCLUDE: &str = "exclude";
pub const PARAM_CATEGORY: &str = "category";

/// A single filter-field change to persist into the parameter bag.
///
/// `None` (or an empty exclusion list) removes the parameter entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    MaxCalories(Option<u32>),
    Category(Option<Category>),
    ExcludeAllergens(Vec<String>),
}

/// Read the current filter state out of the parameter bag.
///
/// Malformed values degrade silently: a non-numeric calorie ceiling and a
/// category outside the closed set both decode to "filter not applied".
pub fn decode(params: &ParamMap) -> Filters {
    Filters {
        max_calories: params
            .get(PARAM_MAX_CALORIES)
            .and_then(|raw| raw.parse().ok()),
        category: params.get(PARAM_CATEGORY).and_then(Category::parse),
        exclude_allergens: params
            .get_all(PARAM_EXCLUDE)
            .into_iter()
            .map(str::to_string)
            .collect(),
        ..Filters::default()
    }
}

/// Persist one filter-field change into the parameter bag.
pub fn apply(params: &mut ParamMap, update: FilterUpdate) {
    match update {
        FilterUpdate::ExcludeAllergens(values) => {
            // Rewrite the whole repeated parameter, preserving list order.
            params.delete(PARAM_EXCLUDE);
            for value in values {
                params.append(PARAM_EXCLUDE, value);
            }
        }
        FilterUpdate::MaxCalories(None) => params.delete(PARAM_MAX_CALORIES),
        FilterUpdate::MaxCalories(Some(ceiling)) => {
            params.set(PARAM_MAX_CALORIES, ceiling.to_string());
        }
        FilterUpdate::Category(None) => params.delete(PARAM_CATEGORY),
        FilterUpdate::Category(Some(category)) => {
            params.set(PARAM_CATEGORY, category.as_str());
        }
    }
}

/// Reset all parameters, discarding category, calorie ceiling, and
/// exclusions simultaneously.
pub fn clear(params: &mut ParamMap) {
    params.clear();
}

/// Write every codec-owned field of a filter value into a fresh bag.
pub fn encode(filters: &Filters) -> ParamMap {
    let mut params = ParamMap::new();
    apply(&mut params, FilterUpdate::MaxCalories(filters.max_calories));
    apply(&mut params, FilterUpdate::Category(filters.category));
    apply(
        &mut params,
        FilterUpdate::ExcludeAllergens(filters.exclude_allergens.clone()),
    );
    params
}
