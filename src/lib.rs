//! Query-and-filter core for a theme-park dining catalog.
//!
//! `menu-core` turns user-selected filter state (persisted in navigable URL
//! parameters) into correctly-scoped, validated result sets: equality
//! predicates are pushed to the remote store, predicates the store cannot
//! express are applied as local post-filters, and every row crossing the
//! transport boundary passes through a validating constructor before it
//! reaches business logic.
//!
//! The core is read-only and transport-agnostic; it consumes the backend
//! through the narrow [`query::CatalogStore`] contract.

pub mod cache;
pub mod codec;
pub mod query;
pub mod search;
pub mod types;
pub mod validate;
