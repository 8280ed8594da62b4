// src/changelog/fetch.rs
// =============================================================================
// This module fetches raw CHANGELOG.md files over HTTP.
//
// Strategy:
// - Build the URL by interpolating the package directory into the base path
// - Issue one GET per changelog and decode the body as text
// - Treat any non-success status as a hard error (the body of a 404 page is
//   not a changelog, and writing it would corrupt the published site)
//
// Why raw.githubusercontent.com and not the GitHub API?
// - The files are public, so raw access needs no authentication
// - We want the file contents verbatim, not a JSON envelope around them
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - String formatting: To build the per-package URL
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

// How long a single fetch may take before we give up.
// The files are small; anything slower than this means something is wrong.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the HTTP client used for all fetches in one run.
///
/// One client means one connection pool, so sequential fetches against the
/// same host reuse the connection instead of re-handshaking TLS each time.
pub fn build_client() -> Result<Client> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    Ok(client)
}

// Builds the remote URL for one package's changelog
//
// The remote layout is fixed: every package directory contains a
// CHANGELOG.md at its top level.
//
// Example:
//   base = "https://raw.githubusercontent.com/.../packages"
//   directory_name = "svelte"
//   -> "https://raw.githubusercontent.com/.../packages/svelte/CHANGELOG.md"
pub fn changelog_url(base_url: &str, directory_name: &str) -> String {
    // Tolerate a trailing slash on the base so --base-url is forgiving
    let base = base_url.trim_end_matches('/');
    format!("{}/{}/CHANGELOG.md", base, directory_name)
}

// Fetches one changelog and returns its body as text
//
// Parameters:
//   client: reqwest HTTP client (borrowed, we don't own it)
//   url: the changelog URL to fetch
//
// Returns: the raw markdown body, or an error naming the URL
//
// A non-success status fails the whole run. The original script this tool
// replaces wrote whatever body came back regardless of status; that is a
// defect, not behavior to preserve.
pub async fn fetch_changelog(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to fetch {}: HTTP {}",
            url,
            response.status()
        ));
    }

    let content = response.text().await?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_changelog_url_interpolation() {
        let url = changelog_url(
            "https://raw.githubusercontent.com/wuchalejs/wuchale/refs/heads/main/packages",
            "vite-plugin",
        );
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/wuchalejs/wuchale/refs/heads/main/packages/vite-plugin/CHANGELOG.md"
        );
    }

    #[test]
    fn test_changelog_url_tolerates_trailing_slash() {
        let url = changelog_url("http://127.0.0.1:9000/packages/", "jsx");
        assert_eq!(url, "http://127.0.0.1:9000/packages/jsx/CHANGELOG.md");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wuchale/CHANGELOG.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# v1.0.0\n- first release\n"))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let url = changelog_url(&server.uri(), "wuchale");
        let body = fetch_changelog(&client, &url).await.unwrap();
        assert_eq!(body, "# v1.0.0\n- first release\n");
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing/CHANGELOG.md"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404: Not Found"))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let url = changelog_url(&server.uri(), "missing");
        let err = fetch_changelog(&client, &url).await.unwrap_err();
        // The error should name both the URL and the status so the operator
        // can tell which package broke the run
        let msg = err.to_string();
        assert!(msg.contains("missing/CHANGELOG.md"), "got: {}", msg);
        assert!(msg.contains("404"), "got: {}", msg);
    }
}
