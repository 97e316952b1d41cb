//! Numbered-menu front end for the library engine.

pub mod input;
pub mod menu;

use std::{fs, path::Path};

use anyhow::Context;
use library_engine::{LibraryEngine, parse_catalog};

pub use menu::{Menu, MenuChoice, UnknownChoice};

/// Seed `engine` from a JSON catalog file and return how many books were
/// added. Entries the engine refuses are logged and skipped.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a catalog document.
pub fn load_catalog_file(engine: &mut LibraryEngine, path: &Path) -> anyhow::Result<usize> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let entries = parse_catalog(&text)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;

    let isbns: Vec<String> = entries.iter().map(|entry| entry.isbn.clone()).collect();
    let mut added = 0_usize;
    for (isbn, reply) in isbns.iter().zip(engine.import_catalog(entries)) {
        if reply.success {
            added = added.saturating_add(1);
        } else {
            tracing::warn!(%isbn, reason = %reply, "skipped catalog entry");
        }
    }
    tracing::info!(added, path = %path.display(), "catalog loaded");
    Ok(added)
}
