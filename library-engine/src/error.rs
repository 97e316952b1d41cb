//! Error types for the library engine.
//!
//! The stores and the [`Book`](crate::books::Book) entity report failures
//! through small typed enums. The engine folds them into [`EngineError`],
//! whose `Display` text is the message shown to the person at the keyboard.

/// Failures raised by the [`UserStore`](crate::users::UserStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    /// A user with this exact username is already registered.
    #[error("username '{username}' already exists")]
    DuplicateUsername {
        /// The rejected username.
        username: String,
    },

    /// Unknown username or wrong password. The two cases are not told apart.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Failures raised while creating a [`Book`](crate::books::Book) or adding
/// it to the [`BookStore`](crate::books::BookStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    /// A book with this ISBN is already catalogued.
    #[error("duplicate ISBN '{isbn}' not allowed")]
    DuplicateIsbn {
        /// The rejected ISBN.
        isbn: String,
    },

    /// The ISBN was empty.
    #[error("ISBN cannot be empty")]
    MissingIsbn,

    /// Title or author was empty after trimming.
    #[error("book must have a title and an author")]
    MissingTitleOrAuthor,

    /// The page sequence was empty.
    #[error("book must have at least one page")]
    NoPages,
}

/// Failures raised by direct page access on a [`Book`](crate::books::Book).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The requested page lies past the last page.
    #[error("page {index} out of range (book has {page_count} pages)")]
    OutOfRange {
        /// Requested zero-based index.
        index: usize,
        /// Number of pages in the book.
        page_count: usize,
    },
}

/// Failures while reading a JSON catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not a JSON array of catalog entries.
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Engine-level failure. The `Display` output is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Signup with a username that is taken.
    #[error("User already exists.")]
    UserExists,

    /// Login failed, for whatever reason.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// `add_book` with an ISBN that is taken.
    #[error("Book already exists.")]
    BookExists,

    /// `add_book` with an empty ISBN.
    #[error("ISBN required.")]
    IsbnRequired,

    /// `add_book` with an empty title or author.
    #[error("Title and author required.")]
    TitleAndAuthorRequired,

    /// `add_book` with no pages.
    #[error("Book must have at least one page.")]
    NoPages,

    /// Reading requires a session.
    #[error("No user logged in.")]
    NotLoggedIn,

    /// No book with the requested ISBN.
    #[error("Book not found.")]
    BookNotFound,

    /// The reader's cursor is already past the last page.
    #[error("End of book.")]
    EndOfBook,
}

impl From<UserError> for EngineError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateUsername { .. } => Self::UserExists,
            UserError::InvalidCredentials => Self::InvalidCredentials,
        }
    }
}

impl From<BookError> for EngineError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::DuplicateIsbn { .. } => Self::BookExists,
            BookError::MissingIsbn => Self::IsbnRequired,
            BookError::MissingTitleOrAuthor => Self::TitleAndAuthorRequired,
            BookError::NoPages => Self::NoPages,
        }
    }
}
