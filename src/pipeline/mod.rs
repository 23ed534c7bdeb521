//! Analysis pipeline: heuristics and remote lookups fanned out per
//! URL, merged into one verdict.

pub mod aggregator;
pub mod analyzer;
