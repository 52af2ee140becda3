// CyrLat - core/mod.rs
//
// Core business logic layer: the transliteration engine.
// Dependencies: standard library and serde derives only.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod detect;
pub mod engine;
pub mod mapping;
pub mod model;

pub use engine::{transliterate_auto, transliterate_bgn_to_ru, transliterate_ru_to_bgn};
