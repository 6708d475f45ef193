use crate::types::{Filters, MenuItem};

/// Apply the predicates the remote store cannot express in one round trip.
///
/// Calorie ceiling: once a ceiling is active, an item must carry nutrition
/// data with a non-null calorie value at or below the ceiling; absence is
/// exclusion, not a pass. Allergen exclusion: only `contains` entries whose
/// type is in the exclusion set knock an item out; `may_contain` never
/// does, regardless of type match.
pub fn apply(mut items: Vec<MenuItem>, filters: &Filters) -> Vec<MenuItem> {
    if let Some(ceiling) = filters.max_calories {
        items.retain(|item| {
            item.nutrition
                .as_ref()
                .and_then(|nutrition| nutrition.calories)
                .is_some_and(|calories| calories <= f64::from(ceiling))
        });
    }

    if !filters.exclude_allergens.is_empty() {
        items.retain(|item| {
            !item.allergens.iter().any(|allergen| {
                allergen.is_definite()
                    && filters
                        .exclude_allergens
                        .iter()
                        .any(|excluded| excluded == &allergen.allergen_type)
            })
        });
    }

    items
}
