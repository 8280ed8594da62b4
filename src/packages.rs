// src/packages.rs
// =============================================================================
// This module holds the static list of packages whose changelogs we mirror.
//
// The list is hard-coded on purpose: the set of packages changes rarely
// (when a new package is added to the monorepo), and editing this file is
// the expected way to keep it in sync. There is no discovery step.
//
// Rust concepts:
// - const: Data baked into the binary at compile time
// - &'static str: String slices that live for the whole program
// =============================================================================

use serde::Serialize;

// One changelog source: which directory in the monorepo it lives under,
// and the published package name shown as the page title.
//
// #[derive(Serialize)] lets the `list --json` output reuse this struct directly
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PackagePair {
    /// Directory name under the monorepo's packages/ tree
    ///
    /// Also determines the local output file name (`<directory_name>.md`)
    pub directory_name: &'static str,

    /// Published (npm-style) name used in the generated front matter
    pub published_name: &'static str,
}

impl PackagePair {
    /// Local file name the changelog page is written as.
    ///
    /// Deterministic: derived only from the directory name, so repeated
    /// runs always overwrite the same file.
    pub fn output_file_name(&self) -> String {
        format!("{}.md", self.directory_name)
    }
}

/// The packages to mirror, in fetch order.
///
/// Order matters: fetches are sequential and a failure aborts the run, so
/// packages earlier in the list may have been written when a later one fails.
pub const PACKAGES: &[PackagePair] = &[
    PackagePair {
        directory_name: "wuchale",
        published_name: "wuchale",
    },
    PackagePair {
        directory_name: "svelte",
        published_name: "@wuchale/svelte",
    },
    PackagePair {
        directory_name: "jsx",
        published_name: "@wuchale/jsx",
    },
    PackagePair {
        directory_name: "vite-plugin",
        published_name: "@wuchale/vite-plugin",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name_is_derived_from_directory() {
        let pair = PackagePair {
            directory_name: "vite-plugin",
            published_name: "@wuchale/vite-plugin",
        };
        assert_eq!(pair.output_file_name(), "vite-plugin.md");
    }

    #[test]
    fn test_package_list_order_is_stable() {
        // The sequential-abort semantics depend on this order, so pin it
        let names: Vec<&str> = PACKAGES.iter().map(|p| p.directory_name).collect();
        assert_eq!(names, vec!["wuchale", "svelte", "jsx", "vite-plugin"]);
    }

    #[test]
    fn test_directory_names_are_unique() {
        // Two packages writing the same output file would silently clobber
        // each other, so check for duplicates
        let mut names: Vec<&str> = PACKAGES.iter().map(|p| p.directory_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PACKAGES.len());
    }
}
