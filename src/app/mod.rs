// SimHire - app/mod.rs
//
// Application layer: catalog loading and state management.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod catalog_mgr;
pub mod state;
