pub mod entities;
pub mod filters;

pub use entities::{Allergen, MenuItem, NutritionalData, Park, Restaurant};
pub use filters::{Category, Filters};
