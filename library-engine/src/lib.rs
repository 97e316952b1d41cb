//! In-memory library with per-reader page progress.
//!
//! This crate keeps registered users and a book catalog in memory, tracks a
//! single logged-in session, and serves books one page at a time from a
//! cursor kept per user and per book.

pub mod books;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod events;
pub mod observers;
pub mod users;

pub use books::{Book, BookStore, Direction};
pub use catalog::{CatalogEntry, parse_catalog};
pub use engine::{LibraryEngine, Reply, Session};
pub use error::{BookError, CatalogError, EngineError, PageError, UserError};
pub use events::LibraryEvent;
pub use observers::{JsonLinesObserver, LibraryObserver, TracingObserver};
pub use users::{User, UserStore};
