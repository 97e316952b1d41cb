use std::{collections::HashMap, fmt};

use crate::error::{BookError, PageError};

/// Direction of a single page turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the last page
    #[default]
    Forward,
    /// Towards the first page
    Backward,
}

/// A catalogued book with its own navigation cursor.
///
/// The cursor here is local to the book. Reading through the engine tracks
/// progress per user instead and never moves it.
#[derive(Clone, PartialEq, Eq)]
pub struct Book {
    /// Catalog key, stored as given
    isbn: String,
    /// Trimmed, non-empty
    title: String,
    /// Trimmed, non-empty
    author: String,
    /// At least one entry
    pages: Vec<String>,
    /// Always a valid index into `pages`
    current_page: usize,
}

impl Book {
    /// Validate the fields and build a book positioned on its first page.
    ///
    /// Title and author are trimmed; the ISBN and page texts are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns `BookError::MissingIsbn` for an empty ISBN,
    /// `BookError::MissingTitleOrAuthor` if either is blank and
    /// `BookError::NoPages` if `pages` is empty.
    pub fn new(
        isbn: impl Into<String>,
        title: &str,
        author: &str,
        pages: Vec<String>,
    ) -> Result<Self, BookError> {
        let isbn = isbn.into();
        if isbn.is_empty() {
            return Err(BookError::MissingIsbn);
        }
        let (title, author) = (title.trim(), author.trim());
        if title.is_empty() || author.is_empty() {
            return Err(BookError::MissingTitleOrAuthor);
        }
        if pages.is_empty() {
            return Err(BookError::NoPages);
        }
        Ok(Self {
            isbn,
            title: title.to_string(),
            author: author.to_string(),
            pages,
            current_page: 0,
        })
    }

    /// Catalog identifier
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// All page texts in order
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Number of pages, always at least one
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Position of the book-local cursor
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Text of a page without moving the cursor
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Text under the cursor
    fn current_text(&self) -> &str {
        self.page(self.current_page).unwrap_or_default()
    }

    /// Step one page in `direction` and return the text under the cursor.
    ///
    /// The move saturates: at either end the cursor stays where it is and the
    /// current page is returned again.
    pub fn turn_page(&mut self, direction: Direction) -> &str {
        let target = match direction {
            Direction::Forward => self.current_page.checked_add(1),
            Direction::Backward => self.current_page.checked_sub(1),
        };
        if let Some(index) = target.filter(|index| *index < self.pages.len()) {
            self.current_page = index;
        }
        self.current_text()
    }

    /// Jump the cursor to `index` and return that page's text.
    ///
    /// # Errors
    ///
    /// Returns `PageError::OutOfRange` if `index` is past the last page; the
    /// cursor is left untouched in that case.
    pub fn get_page(&mut self, index: usize) -> Result<&str, PageError> {
        if index >= self.pages.len() {
            return Err(PageError::OutOfRange { index, page_count: self.pages.len() });
        }
        self.current_page = index;
        Ok(self.current_text())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}

// Page count instead of page bodies
impl fmt::Debug for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Book")
            .field("isbn", &self.isbn)
            .field("title", &self.title)
            .field("author", &self.author)
            .field("pages", &self.pages.len())
            .finish()
    }
}

/// In-memory catalog keyed by ISBN
#[derive(Debug, Default)]
pub struct BookStore {
    /// isbn -> book
    books: HashMap<String, Book>,
}

impl BookStore {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and catalogue a new book.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateIsbn` if the ISBN is taken, otherwise any
    /// validation error from [`Book::new`].
    pub fn add(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        pages: Vec<String>,
    ) -> Result<&Book, BookError> {
        if self.books.contains_key(isbn) {
            return Err(BookError::DuplicateIsbn { isbn: isbn.to_string() });
        }
        let book = Book::new(isbn, title, author, pages)?;
        let book: &Book = self.books.entry(isbn.to_string()).or_insert(book);
        Ok(book)
    }

    /// Look up a book by ISBN
    #[must_use]
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Mutable lookup for book-local navigation
    pub fn get_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.get_mut(isbn)
    }

    /// Every catalogued book, in no particular order
    #[must_use]
    pub fn all(&self) -> Vec<&Book> {
        self.books.values().collect()
    }

    /// Number of catalogued books
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
