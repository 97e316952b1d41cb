use std::fmt;

use crate::{
    books::{Book, BookStore},
    catalog::CatalogEntry,
    error::EngineError,
    events::LibraryEvent,
    observers::LibraryObserver,
    users::{User, UserStore},
};

/// Outcome of an engine operation, ready to show to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Whether the operation took effect
    pub success: bool,
    /// Message for the person at the keyboard
    pub message: String,
}

impl Reply {
    /// A successful reply
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    /// A refused reply
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

impl From<Result<String, EngineError>> for Reply {
    fn from(result: Result<String, EngineError>) -> Self {
        match result {
            Ok(message) => Self::ok(message),
            Err(err) => Self::fail(err.to_string()),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Who is currently logged in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody
    #[default]
    LoggedOut,
    /// The user with this username
    LoggedIn(String),
}

impl Session {
    /// Username of the active user, if any
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(username) => Some(username.as_str()),
        }
    }
}

/// Library front desk: owns the user and book stores, the session, and the
/// per-user reading progress.
pub struct LibraryEngine {
    /// Registered users, including their reading progress
    users: UserStore,
    /// The catalog
    books: BookStore,
    /// At most one active user
    session: Session,
    /// Registered event observers
    observers: Vec<Box<dyn LibraryObserver>>,
}

impl fmt::Debug for LibraryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryEngine")
            .field("users", &self.users)
            .field("books", &self.books)
            .field("session", &self.session)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for LibraryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryEngine {
    /// Create an empty library with nobody logged in
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: UserStore::new(),
            books: BookStore::new(),
            session: Session::LoggedOut,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of engine events
    pub fn register_observer(&mut self, observer: Box<dyn LibraryObserver>) {
        self.observers.push(observer);
    }

    /// Tell every observer about an event
    fn notify(&self, event: &LibraryEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }

    /// Register a new user. Does not log them in.
    #[tracing::instrument(level = "debug", skip(self, password))]
    pub fn signup(&mut self, username: &str, password: &str) -> Reply {
        refusal_logged(self.try_signup(username, password))
    }

    /// Authenticate and make the user the active session, replacing any
    /// previous one.
    #[tracing::instrument(level = "debug", skip(self, password))]
    pub fn login(&mut self, username: &str, password: &str) -> Reply {
        refusal_logged(self.try_login(username, password))
    }

    /// Add a book to the catalog. No session is required.
    #[tracing::instrument(level = "debug", skip(self, pages), fields(page_count = pages.len()))]
    pub fn add_book(&mut self, isbn: &str, title: &str, author: &str, pages: Vec<String>) -> Reply {
        refusal_logged(self.try_add_book(isbn, title, author, pages))
    }

    /// Serve the active user the next page of a book and advance their
    /// cursor. Reading is strictly sequential; once the last page has been
    /// served every further call reports the end of the book.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn read_page(&mut self, isbn: &str) -> Reply {
        refusal_logged(self.try_read_page(isbn))
    }

    /// Add every entry of a parsed catalog, one reply per entry
    pub fn import_catalog(
        &mut self,
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Vec<Reply> {
        entries
            .into_iter()
            .map(|entry| self.add_book(&entry.isbn, &entry.title, &entry.author, entry.pages))
            .collect()
    }

    /// Signup without the reply conversion
    fn try_signup(&mut self, username: &str, password: &str) -> Result<String, EngineError> {
        self.users.add(username, password)?;
        self.notify(&LibraryEvent::SignedUp { username: username.to_string() });
        Ok("Signup successful.".to_string())
    }

    /// Login without the reply conversion
    fn try_login(&mut self, username: &str, password: &str) -> Result<String, EngineError> {
        let authenticated =
            self.users.authenticate(username, password).map(|user| user.username().to_string());
        let username = match authenticated {
            Ok(username) => username,
            Err(err) => {
                self.notify(&LibraryEvent::LoginRejected { username: username.to_string() });
                return Err(err.into());
            }
        };
        let message = format!("Welcome {username}!");
        self.session = Session::LoggedIn(username.clone());
        self.notify(&LibraryEvent::LoggedIn { username });
        Ok(message)
    }

    /// Book creation without the reply conversion
    fn try_add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        pages: Vec<String>,
    ) -> Result<String, EngineError> {
        let event = {
            let book = self.books.add(isbn, title, author, pages)?;
            LibraryEvent::BookAdded {
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
            }
        };
        self.notify(&event);
        Ok("Book added.".to_string())
    }

    /// Sequential reading without the reply conversion
    fn try_read_page(&mut self, isbn: &str) -> Result<String, EngineError> {
        let username = self.session.username().ok_or(EngineError::NotLoggedIn)?;
        let book = self.books.get(isbn).ok_or(EngineError::BookNotFound)?;
        let user = self.users.get_mut(username).ok_or(EngineError::NotLoggedIn)?;
        let cursor = user.next_page(isbn);
        let username = username.to_string();

        let Some(text) = book.page(cursor) else {
            self.notify(&LibraryEvent::EndOfBookReached { username, isbn: isbn.to_string() });
            return Err(EngineError::EndOfBook);
        };

        let page = cursor.saturating_add(1);
        let message = format!("Page {page}: {text}");
        let finished = page == book.page_count();
        user.set_progress(isbn, page);

        self.notify(&LibraryEvent::PageRead {
            username: username.clone(),
            isbn: isbn.to_string(),
            page,
        });
        if finished {
            self.notify(&LibraryEvent::FinishedBook { username, isbn: isbn.to_string() });
        }
        Ok(message)
    }

    /// Look up a book by ISBN
    #[must_use]
    pub fn get_book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// The logged-in user, if any
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.username().and_then(|username| self.users.get(username))
    }

    /// Current session state
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// All registered users
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// The book catalog
    #[must_use]
    pub fn books(&self) -> &BookStore {
        &self.books
    }
}

/// Convert to a reply, logging the reason for a refusal
fn refusal_logged(result: Result<String, EngineError>) -> Reply {
    if let Err(reason) = &result {
        tracing::debug!(%reason, "operation refused");
    }
    result.into()
}
