// src/changelog/write.rs
// =============================================================================
// This module turns a fetched changelog into a content page on disk.
//
// The generated file is the fetched markdown with a YAML front-matter block
// prepended. The site framework reads the `title` field to label the page;
// everything after the closing delimiter is rendered verbatim.
//
// Rust concepts:
// - PathBuf: Owned filesystem paths
// - tokio::fs: Async file system operations
// =============================================================================

use crate::packages::PackagePair;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

// Renders the full document: front matter first, fetched content after
//
// The shape is fixed and must not drift — the site framework is picky about
// front matter, and the content must pass through untransformed:
//
//   ---
//   title: "<published_name>"
//   ---
//   <content>
pub fn render_document(published_name: &str, content: &str) -> String {
    format!("---\ntitle: \"{}\"\n---\n{}", published_name, content)
}

// Writes one changelog page, overwriting any previous version
//
// Parameters:
//   out_dir: content directory the page goes into
//   pair: which package this page is for (determines file name and title)
//   content: the fetched changelog body
//
// Returns: the path of the written file
//
// The output directory is created recursively if missing, so the tool works
// on a fresh checkout where the content tree doesn't exist yet.
pub async fn write_changelog(
    out_dir: &Path,
    pair: &PackagePair,
    content: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let path = out_dir.join(pair.output_file_name());
    let document = render_document(pair.published_name, content);

    fs::write(&path, &document)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document_shape() {
        let doc = render_document("wuchale", "# v1.0.0\n...");
        assert_eq!(doc, "---\ntitle: \"wuchale\"\n---\n# v1.0.0\n...");
    }

    #[test]
    fn test_render_keeps_content_verbatim() {
        // Content that itself looks like front matter must still pass through
        // untouched; only our own header is generated
        let body = "---\nnot: front matter\n---\ntext\n";
        let doc = render_document("@wuchale/svelte", body);
        assert!(doc.starts_with("---\ntitle: \"@wuchale/svelte\"\n---\n"));
        assert!(doc.ends_with(body));
    }

    #[tokio::test]
    async fn test_write_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("content").join("changelogs");
        let pair = PackagePair {
            directory_name: "jsx",
            published_name: "@wuchale/jsx",
        };

        let path = write_changelog(&out_dir, &pair, "# v0.2.0\n").await.unwrap();

        assert_eq!(path, out_dir.join("jsx.md"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "---\ntitle: \"@wuchale/jsx\"\n---\n# v0.2.0\n");
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let pair = PackagePair {
            directory_name: "wuchale",
            published_name: "wuchale",
        };

        write_changelog(tmp.path(), &pair, "old body").await.unwrap();
        let path = write_changelog(tmp.path(), &pair, "new body").await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "---\ntitle: \"wuchale\"\n---\nnew body");
    }
}
