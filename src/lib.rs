//! Deterministic preference-based warehouse recommendation engine.
//!
//! `warehouse-match` scores an immutable set of warehouse listings against
//! an optional preference vector (district, budget, area, type, verified
//! ownership, availability), ranks them, and explains every match with
//! ordered human-readable reasons. Scoring is a fixed weighted linear
//! formula: identical inputs always produce identical rankings.
//!
//! The [`api`] module exposes the engine over HTTP.

pub mod api;
pub mod config;
pub mod scoring;
pub mod store;
pub mod types;
pub mod warehouse;
