// SimHire - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or any I/O directly.

pub mod catalog;
pub mod filter;
pub mod model;
pub mod range;
