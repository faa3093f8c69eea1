//! Purpose: Shared core library crate for the bibliofile lending-library tool.
//! Exports: `core` (dataset model, file store, catalog, circulation, errors) and `api`.
//! Role: Internal library backing presentation layers; not yet a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;

mod store_paths;
