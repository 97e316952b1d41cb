use std::{collections::HashMap, fmt};

use crate::error::UserError;

/// A registered reader and their per-book progress
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Unique key, fixed at signup
    username: String,
    /// Plaintext, compared for exact equality
    password: String,
    /// ISBN -> index of the next page to read
    progress: HashMap<String, usize>,
}

// Keeps the password out of log output
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

impl User {
    /// Create a user with no reading progress
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into(), progress: HashMap::new() }
    }

    /// The user's unique name
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a candidate password against the stored one
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Recorded cursor for a book, or `None` if it was never opened
    #[must_use]
    pub fn progress(&self, isbn: &str) -> Option<usize> {
        self.progress.get(isbn).copied()
    }

    /// Index of the next page to read in a book, starting at 0
    #[must_use]
    pub fn next_page(&self, isbn: &str) -> usize {
        self.progress(isbn).unwrap_or_default()
    }

    /// Overwrite the cursor for a book
    pub fn set_progress(&mut self, isbn: impl Into<String>, page: usize) {
        self.progress.insert(isbn.into(), page);
    }
}

/// In-memory user registry keyed by username
#[derive(Debug, Default)]
pub struct UserStore {
    /// username -> user
    users: HashMap<String, User>,
}

impl UserStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `UserError::DuplicateUsername` if the exact username is taken.
    pub fn add(&mut self, username: &str, password: &str) -> Result<&User, UserError> {
        if self.users.contains_key(username) {
            return Err(UserError::DuplicateUsername { username: username.to_string() });
        }
        let user: &User =
            self.users.entry(username.to_string()).or_insert_with(|| User::new(username, password));
        Ok(user)
    }

    /// Check credentials and return the matching user.
    ///
    /// # Errors
    ///
    /// Returns `UserError::InvalidCredentials` for an unknown username and for
    /// a wrong password alike.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&User, UserError> {
        self.users
            .get(username)
            .filter(|user| user.password_matches(password))
            .ok_or(UserError::InvalidCredentials)
    }

    /// Look up a user by name
    #[must_use]
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Mutable lookup, used by the engine to advance reading progress
    pub(crate) fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    /// Every registered user, in no particular order
    #[must_use]
    pub fn all(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    /// Number of registered users
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether nobody has signed up yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_add_creates_user() {
        let mut store = UserStore::new();
        let user = store.add("alice", "pw").map(User::clone);
        assert_eq!(user.as_ref().map(User::username), Ok("alice"));
        assert_eq!(store.get("alice").map(User::username), Some("alice"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_user_survives_authentication() {
        let mut store = UserStore::new();
        drop(store.add("bob", "pw"));
        let user = store.authenticate("bob", "pw");
        assert_eq!(user.map(User::username), Ok("bob"));
        assert!(store.get("bob").is_some());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut store = UserStore::new();
        drop(store.add("charlie", "pw"));
        let err = store.add("charlie", "pw2").map(User::clone);
        assert_eq!(err, Err(UserError::DuplicateUsername { username: "charlie".to_string() }));
        // the original password still applies
        assert!(store.authenticate("charlie", "pw").is_ok());
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let mut store = UserStore::new();
        drop(store.add("dave", "pw"));
        assert!(store.add("Dave", "pw").is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_invalid_login_rejected() {
        let mut store = UserStore::new();
        drop(store.add("erin", "pw"));
        assert_eq!(store.authenticate("erin", "wrong"), Err(UserError::InvalidCredentials));
        assert_eq!(store.authenticate("ghost", "pw"), Err(UserError::InvalidCredentials));
    }

    #[test]
    fn test_all_returns_every_user() {
        let mut store = UserStore::new();
        drop(store.add("eve", "pw"));
        drop(store.add("frank", "pw"));
        let names: HashSet<&str> = store.all().into_iter().map(User::username).collect();
        assert_eq!(names, HashSet::from(["eve", "frank"]));
    }

    #[test]
    fn test_set_and_get_progress() {
        let mut user = User::new("alice", "pw");
        assert_eq!(user.progress("123"), None);
        assert_eq!(user.next_page("123"), 0);
        user.set_progress("123", 5);
        assert_eq!(user.progress("123"), Some(5));
        assert_eq!(user.next_page("123"), 5);
    }

    #[test]
    fn test_debug_hides_password() {
        let user = User::new("alice", "hunter2");
        let rendered = format!("{user:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
