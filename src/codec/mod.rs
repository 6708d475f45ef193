//! Filter state codec: bidirectional mapping between [`Filters`] values and
//! the flat, url-safe parameter representation the navigation layer owns.
//!
//! [`Filters`]: crate::types::Filters

pub mod codec;
pub mod params;

pub use codec::{
    apply, clear, decode, encode, FilterUpdate, PARAM_CATEGORY, PARAM_EXCLUDE, PARAM_MAX_CALORIES,
};
pub use params::ParamMap;
