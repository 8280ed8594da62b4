// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

/// Default remote base path the changelogs are mirrored from.
///
/// Each package directory under this path is expected to contain a
/// CHANGELOG.md served as raw text.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/wuchalejs/wuchale/refs/heads/main/packages";

/// Default local directory the site framework reads changelog pages from.
pub const DEFAULT_OUT_DIR: &str = "src/content/docs/changelogs";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "changelog-sync",
    version = "0.1.0",
    about = "A CLI tool to mirror package changelogs into the docs content directory",
    long_about = "changelog-sync fetches CHANGELOG.md files for each configured package from the \
                  remote monorepo and writes them locally with a front-matter header, so the \
                  static site framework can render them as pages. It is a manual, re-runnable \
                  build step: every run overwrites the previous output."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (sync, list)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every configured changelog and write it into the content directory
    ///
    /// Example: changelog-sync sync --out-dir src/content/docs/changelogs
    Sync {
        /// Directory the generated changelog pages are written to
        ///
        /// Created (recursively) if it does not exist; existing files
        /// with the same names are overwritten.
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,

        /// Remote base URL the changelogs are fetched from
        ///
        /// Mostly useful for pointing the tool at a mirror. The per-package
        /// path `<directory>/CHANGELOG.md` is appended to it.
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Output a JSON report of the written files instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Print the configured package list without fetching anything
    ///
    /// Example: changelog-sync list --json
    List {
        /// Output the package list in JSON format
        #[arg(long)]
        json: bool,
    },
}
