//! Recover polynomial secrets from radix-encoded share documents.
//!
//! Usage:
//!     shamir-recover                     # reads test1.json and test2.json
//!     shamir-recover shares/a.json shares/b.json
//!
//! Each document that reconstructs prints one line with its secret on stdout.
//! Everything else goes to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use shamir_recover::solve_secret_sharing;

#[derive(Parser)]
#[command(name = "shamir-recover")]
#[command(version)]
#[command(about = "Recover the constant term of a polynomial from radix-encoded shares", long_about = None)]
struct Cli {
    /// Share documents, processed in order
    #[arg(value_name = "DOCUMENT", default_values = ["test1.json", "test2.json"])]
    documents: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // a failed document never stops the ones after it
    for path in &cli.documents {
        match solve_secret_sharing(path) {
            Ok(secret) => {
                writeln!(out, "{}", secret)?;
                out.flush()?;
            }
            Err(e) => eprintln!("Error processing {}: {}", path.display(), e),
        }
    }

    Ok(())
}
