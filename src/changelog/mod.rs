// src/changelog/mod.rs
// =============================================================================
// This module handles mirroring changelogs from the remote monorepo.
//
// The work splits into three small pieces:
// - fetch.rs: builds the raw.githubusercontent.com URL and does the HTTP GET
// - write.rs: prepends the front-matter header and writes the local file
// - sync.rs: drives the two sequentially over the configured package list
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod sync;
mod write;

// Re-export the pieces main.rs needs
pub use sync::{sync_changelogs, SyncOptions, SyncRecord};
