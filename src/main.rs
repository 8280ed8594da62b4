// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Print the report (table or JSON)
// 4. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The fetches and file writes are async I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod changelog; // src/changelog/ - fetch, write, and sync logic
mod cli; // src/cli.rs - command-line parsing
mod packages; // src/packages.rs - the static package list

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // The run aborted partway: print the cause and exit with code 2.
            // Files written before the failure stay on disk; re-running after
            // the fix overwrites everything anyway.
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = everything mirrored
//   Err = the run aborted (network, status, or file-system failure)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Sync {
            out_dir,
            base_url,
            json,
        } => handle_sync(out_dir, base_url, json).await,
        Commands::List { json } => handle_list(json),
    }
}

// Handles the 'sync' subcommand: mirror every configured changelog
async fn handle_sync(out_dir: String, base_url: String, json: bool) -> Result<i32> {
    println!(
        "🔄 Syncing {} changelog(s) from {}",
        packages::PACKAGES.len(),
        base_url
    );

    let options = changelog::SyncOptions {
        base_url,
        out_dir: out_dir.into(),
    };

    // Sequential fetch-and-write; the first failure aborts the run
    let records = changelog::sync_changelogs(&options).await?;

    print_report(&records, json)?;

    Ok(0)
}

// Handles the 'list' subcommand: show the configured packages without fetching
fn handle_list(json: bool) -> Result<i32> {
    if json {
        let json_output = serde_json::to_string_pretty(packages::PACKAGES)?;
        println!("{}", json_output);
    } else {
        println!("{:<15} {:<25} {:<15}", "DIRECTORY", "PUBLISHED NAME", "OUTPUT FILE");
        println!("{}", "=".repeat(55));
        for pair in packages::PACKAGES {
            println!(
                "{:<15} {:<25} {:<15}",
                pair.directory_name,
                pair.published_name,
                pair.output_file_name()
            );
        }
    }
    Ok(0)
}

// Prints the end-of-run report either as a summary or JSON
fn print_report(records: &[changelog::SyncRecord], json: bool) -> Result<()> {
    if json {
        // Serialize records to JSON and print
        let json_output = serde_json::to_string_pretty(records)?;
        println!("{}", json_output);
    } else {
        let total_bytes: usize = records.iter().map(|r| r.bytes).sum();
        println!();
        println!("📊 Summary:");
        println!("   ✅ Mirrored: {}", records.len());
        println!("   📦 Total written: {} bytes", total_bytes);
    }
    Ok(())
}
