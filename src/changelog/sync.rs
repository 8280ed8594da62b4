// src/changelog/sync.rs
// =============================================================================
// This module drives the whole mirror: fetch each changelog, write each page.
//
// The loop is deliberately sequential. One fetch-then-write completes fully
// before the next begins, and the first failure aborts the run via `?`.
// A consequence worth knowing: packages earlier in the list may already be
// on disk when a later one fails. That is fine for a manual build step —
// the fix is to re-run after the underlying problem is resolved.
//
// We also keep fetches sequential rather than concurrent as a courtesy to
// the remote host; four tiny files do not need a connection storm.
//
// Rust concepts:
// - async/await: Suspension at the network call and the file write
// - The ? operator: Early return on the first error
// - Serialize: So the report can be printed as JSON
// =============================================================================

use super::fetch::{build_client, changelog_url, fetch_changelog};
use super::write::write_changelog;
use crate::packages::{PackagePair, PACKAGES};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Where to fetch from and where to write to for one run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Remote base URL (per-package path is appended to it)
    pub base_url: String,
    /// Local content directory the pages are written into
    pub out_dir: PathBuf,
}

// One successfully mirrored changelog, for the end-of-run report
//
// #[derive(Serialize)] lets --json print the whole report with serde_json
#[derive(Debug, Clone, Serialize)]
pub struct SyncRecord {
    /// Package directory name in the monorepo
    pub package: String,
    /// Title written into the page's front matter
    pub title: String,
    /// URL the changelog was fetched from
    pub url: String,
    /// Local path the page was written to
    pub output_path: PathBuf,
    /// Size of the written document in bytes (header included)
    pub bytes: usize,
}

/// Mirrors every configured changelog, in list order.
///
/// Returns one record per package on full success. On the first failure the
/// error propagates immediately and no later packages are fetched or written.
pub async fn sync_changelogs(options: &SyncOptions) -> Result<Vec<SyncRecord>> {
    let client = build_client()?;

    let mut records = Vec::with_capacity(PACKAGES.len());

    for pair in PACKAGES {
        let record = sync_one(&client, options, pair).await?;
        println!(
            "   📄 {} -> {} ({} bytes)",
            pair.directory_name,
            record.output_path.display(),
            record.bytes
        );
        records.push(record);
    }

    Ok(records)
}

// Fetches and writes a single package's changelog
//
// Kept separate so the per-package steps read top to bottom:
// build URL, fetch, write, report.
async fn sync_one(
    client: &reqwest::Client,
    options: &SyncOptions,
    pair: &PackagePair,
) -> Result<SyncRecord> {
    let url = changelog_url(&options.base_url, pair.directory_name);
    let content = fetch_changelog(client, &url).await?;
    let output_path = write_changelog(&options.out_dir, pair, &content).await?;

    // Front matter is three short lines; recompute the document length the
    // same way write.rs renders it rather than stat-ing the file again
    let bytes = super::write::render_document(pair.published_name, &content).len();

    Ok(SyncRecord {
        package: pair.directory_name.to_string(),
        title: pair.published_name.to_string(),
        url,
        output_path,
        bytes,
    })
}
