//! Defensive runtime validation of backend responses.
//!
//! Every value crossing from the untyped transport into the typed domain
//! model passes through one of these validating constructors; no field is
//! trusted without a check. Known backend quirks (numeric-as-string price)
//! are normalized here, exactly once.

pub mod entities;

pub use entities::{menu_item, menu_items, park, parks, restaurant, restaurants, ShapeError};
