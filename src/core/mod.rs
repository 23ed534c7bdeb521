//! Verdict model, error taxonomy and host-side verdict cache.

pub mod error;
pub mod store;
pub mod types;
