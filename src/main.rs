//! fieldcheck — warn when a struct field's doc comment starts with the
//! field's name in the wrong casing.
//!
//! Two modes:
//!
//! - **self-check**: `fieldcheck -s api/types.rs` — each field's doc is
//!   compared against its own declared name.
//! - **cross-check**: `fieldcheck -s api/types.rs -i internal/types.rs` —
//!   the doc text is looked up on the matching internal type's field,
//!   keyed by the api struct name and lowercased field name.
//!
//! Mismatches are warnings on stderr, never failures: the exit code is
//! zero however many are found.

mod check;
mod model;
mod parser;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "fieldcheck",
    about = "Check that api struct field doc comments start with the field's declared name"
)]
struct Cli {
    /// Public api type definitions: a file, a directory, or a glob pattern.
    #[arg(short = 's', long)]
    type_src: Option<String>,

    /// Corresponding internal type definitions. When given, doc text is
    /// taken from here instead of the api source.
    #[arg(short = 'i', long)]
    internal_type_src: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let type_src = cli
        .type_src
        .as_deref()
        .context("--type-src is required: it names the api type source")?;
    let public_docs = parser::parse_documentation(type_src)?;

    let mismatches = match cli.internal_type_src.as_deref() {
        None => check::self_check(&public_docs),
        Some(internal_src) => {
            let internal_docs = parser::parse_documentation(internal_src)?;
            let index = check::build_index(&internal_docs);
            check::cross_check(&public_docs, &index)
        }
    };

    for mismatch in &mismatches {
        eprintln!("{}", mismatch);
    }
    Ok(())
}
