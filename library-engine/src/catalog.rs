//! JSON catalog seeding.
//!
//! A catalog is a JSON array of books:
//!
//! ```json
//! [{ "isbn": "123", "title": "T", "author": "A", "pages": ["P1", "P2"] }]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One book as written in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub pages: Vec<String>,
}

/// Parse a catalog document.
///
/// Entries are only checked for shape here; the book rules are applied when
/// the entries are imported into an engine.
///
/// # Errors
///
/// Returns `CatalogError::Malformed` if the text is not a JSON array of
/// entries.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
