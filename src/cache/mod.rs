//! Cache identity for logical queries.
//!
//! [`QueryKey`] canonicalizes a query's shape, scoping parameter, and
//! filter content so that logically-identical queries never double-fetch
//! and logically-different queries never collide. [`ResultCache`] is the
//! minimal replace-on-key store a calling layer owns.

pub mod key;
pub mod store;

pub use key::{FiltersKey, QueryKey};
pub use store::ResultCache;
