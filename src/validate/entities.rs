use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{Allergen, MenuItem, NutritionalData, Park, Restaurant};

/// Structural failure raised when a backend response does not match the
/// expected shape. Always fatal to the query that produced it; there is no
/// partial-record recovery.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("invalid {0} data: expected object")]
    ExpectedObject(&'static str),
    #[error("invalid {0} data: expected array")]
    ExpectedArray(&'static str),
    #[error("invalid {kind} data: {reason}")]
    BadField { kind: &'static str, reason: String },
}

impl ShapeError {
    /// Entity kind the failing record claimed to be.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeError::ExpectedObject(kind) | ShapeError::ExpectedArray(kind) => kind,
            ShapeError::BadField { kind, .. } => kind,
        }
    }

    fn bad_field(kind: &'static str, reason: impl Into<String>) -> Self {
        ShapeError::BadField {
            kind,
            reason: reason.into(),
        }
    }
}

fn object<'a>(raw: &'a Value, kind: &'static str) -> Result<&'a Map<String, Value>, ShapeError> {
    raw.as_object().ok_or(ShapeError::ExpectedObject(kind))
}

fn required_str(
    map: &Map<String, Value>,
    kind: &'static str,
    field: &'static str,
) -> Result<String, ShapeError> {
    match map.get(field).and_then(Value::as_str) {
        Some(value) => Ok(value.to_string()),
        None => Err(ShapeError::bad_field(
            kind,
            format!("missing required field `{field}`"),
        )),
    }
}

fn optional_str(map: &Map<String, Value>, field: &str) -> Option<String> {
    map.get(field).and_then(Value::as_str).map(str::to_string)
}

/// For fields outside the failure contract: missing or non-string reads as
/// empty.
fn lenient_str(map: &Map<String, Value>, field: &str) -> String {
    optional_str(map, field).unwrap_or_default()
}

fn optional_number(map: &Map<String, Value>, field: &str) -> Option<f64> {
    map.get(field).and_then(Value::as_f64)
}

pub fn park(raw: &Value) -> Result<Park, ShapeError> {
    const KIND: &str = "park";
    let map = object(raw, KIND)?;
    Ok(Park {
        id: required_str(map, KIND, "id")?,
        name: required_str(map, KIND, "name")?,
        location: required_str(map, KIND, "location")?,
        timezone: lenient_str(map, "timezone"),
    })
}

pub fn parks(raw: &Value) -> Result<Vec<Park>, ShapeError> {
    let rows = raw.as_array().ok_or(ShapeError::ExpectedArray("parks"))?;
    rows.iter().map(park).collect()
}

pub fn restaurant(raw: &Value) -> Result<Restaurant, ShapeError> {
    const KIND: &str = "restaurant";
    let map = object(raw, KIND)?;
    let park_relation = match map.get("park") {
        Some(value) if !value.is_null() => Some(park(value)?),
        _ => None,
    };
    Ok(Restaurant {
        id: required_str(map, KIND, "id")?,
        park_id: required_str(map, KIND, "park_id")?,
        name: required_str(map, KIND, "name")?,
        location_in_park: optional_str(map, "location_in_park"),
        cuisine_type: optional_str(map, "cuisine_type"),
        park: park_relation,
    })
}

pub fn restaurants(raw: &Value) -> Result<Vec<Restaurant>, ShapeError> {
    let rows = raw
        .as_array()
        .ok_or(ShapeError::ExpectedArray("restaurants"))?;
    rows.iter().map(restaurant).collect()
}

fn nutrition(raw: &Value) -> Result<NutritionalData, ShapeError> {
    const KIND: &str = "nutrition";
    let map = object(raw, KIND)?;
    Ok(NutritionalData {
        id: required_str(map, KIND, "id")?,
        menu_item_id: required_str(map, KIND, "menu_item_id")?,
        source: lenient_str(map, "source"),
        calories: optional_number(map, "calories"),
        carbs: optional_number(map, "carbs"),
        sugar: optional_number(map, "sugar"),
        protein: optional_number(map, "protein"),
        fat: optional_number(map, "fat"),
        saturated_fat: optional_number(map, "saturated_fat"),
        sodium: optional_number(map, "sodium"),
        fiber: optional_number(map, "fiber"),
        cholesterol: optional_number(map, "cholesterol"),
        confidence_score: map
            .get("confidence_score")
            .and_then(Value::as_i64)
            .unwrap_or(0),
    })
}

fn allergen(raw: &Value) -> Result<Allergen, ShapeError> {
    const KIND: &str = "allergen";
    let map = object(raw, KIND)?;
    Ok(Allergen {
        id: required_str(map, KIND, "id")?,
        menu_item_id: required_str(map, KIND, "menu_item_id")?,
        allergen_type: required_str(map, KIND, "allergen_type")?,
        severity: lenient_str(map, "severity"),
    })
}

/// A missing or non-sequence allergen collection normalizes to empty,
/// never raises; a present sequence fails as a whole on any bad element.
fn allergens(raw: Option<&Value>) -> Result<Vec<Allergen>, ShapeError> {
    match raw.and_then(Value::as_array) {
        Some(rows) => rows.iter().map(allergen).collect(),
        None => Ok(Vec::new()),
    }
}

/// The backend serializes DECIMAL columns as strings; parse once here.
/// A string that fails to parse is tolerated and becomes NaN rather than a
/// shape failure.
fn coerce_price(raw: Option<&Value>) -> Option<f64> {
    match raw {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => Some(text.parse().unwrap_or(f64::NAN)),
        Some(_) => Some(f64::NAN),
    }
}

pub fn menu_item(raw: &Value) -> Result<MenuItem, ShapeError> {
    const KIND: &str = "menu item";
    let map = object(raw, KIND)?;

    let category = match map.get("category").and_then(Value::as_str) {
        Some(value) => value.to_string(),
        None => return Err(ShapeError::bad_field(KIND, "missing category")),
    };
    let is_seasonal = match map.get("is_seasonal") {
        None => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(ShapeError::bad_field(KIND, "is_seasonal must be boolean")),
    };
    let nutrition_relation = match map.get("nutritional_data") {
        None | Some(Value::Null) => None,
        Some(value) => Some(nutrition(value)?),
    };
    let restaurant_relation = match map.get("restaurant") {
        Some(value) if !value.is_null() => Some(restaurant(value)?),
        _ => None,
    };

    Ok(MenuItem {
        id: required_str(map, KIND, "id")?,
        restaurant_id: required_str(map, KIND, "restaurant_id")?,
        name: required_str(map, KIND, "name")?,
        description: optional_str(map, "description"),
        price: coerce_price(map.get("price")),
        category,
        is_seasonal,
        photo_url: optional_str(map, "photo_url"),
        nutrition: nutrition_relation,
        allergens: allergens(map.get("allergens"))?,
        restaurant: restaurant_relation,
    })
}

pub fn menu_items(raw: &Value) -> Result<Vec<MenuItem>, ShapeError> {
    let rows = raw
        .as_array()
        .ok_or(ShapeError::ExpectedArray("menu items"))?;
    rows.iter().map(menu_item).collect()
}
