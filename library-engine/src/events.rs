use serde::{Deserialize, Serialize};

/// Things that happen inside the engine, reported to observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LibraryEvent {
    /// A new user registered
    SignedUp { username: String },
    /// A user became the active session
    LoggedIn { username: String },
    /// A login attempt was refused
    LoginRejected { username: String },
    /// A book entered the catalog
    BookAdded { isbn: String, title: String },
    /// A reader was served a page (`page` is 1-based)
    PageRead { username: String, isbn: String, page: usize },
    /// A reader was served the final page of a book
    FinishedBook { username: String, isbn: String },
    /// A reader asked for a page past the end
    EndOfBookReached { username: String, isbn: String },
}

impl LibraryEvent {
    /// One-line human description of the event
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::SignedUp { username } => format!("{username} signed up"),
            Self::LoggedIn { username } => format!("{username} logged in"),
            Self::LoginRejected { username } => format!("login refused for {username}"),
            Self::BookAdded { isbn, title } => format!("added '{title}' ({isbn})"),
            Self::PageRead { username, isbn, page } => {
                format!("{username} read page {page} of {isbn}")
            }
            Self::FinishedBook { username, isbn } => format!("{username} finished {isbn}"),
            Self::EndOfBookReached { username, isbn } => {
                format!("{username} is already at the end of {isbn}")
            }
        }
    }
}
