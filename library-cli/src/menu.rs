use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use colored::Colorize;
use library_engine::{LibraryEngine, Reply};

use crate::input::{parse_pages, prompt, prompt_or_empty};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create an account
    Signup,
    /// Start a session
    Login,
    /// Add a book to the catalog
    AddBook,
    /// Read the next page of a book
    ReadBook,
    /// Leave the loop
    Exit,
}

impl MenuChoice {
    /// Every entry, in menu order
    pub const ALL: [Self; 5] =
        [Self::Signup, Self::Login, Self::AddBook, Self::ReadBook, Self::Exit];

    /// The number typed to pick this entry
    #[must_use]
    pub fn key(self) -> char {
        match self {
            Self::Signup => '1',
            Self::Login => '2',
            Self::AddBook => '3',
            Self::ReadBook => '4',
            Self::Exit => '5',
        }
    }

    /// Label shown in the menu
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Signup => "Signup",
            Self::Login => "Login",
            Self::AddBook => "Add Book",
            Self::ReadBook => "Read Book",
            Self::Exit => "Exit",
        }
    }
}

/// Input that does not name a menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown menu option '{}'", self.0)
    }
}

impl std::error::Error for UnknownChoice {}

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::ALL
                .into_iter()
                .find(|choice| choice.key() == key)
                .ok_or_else(|| UnknownChoice(s.to_string())),
            _ => Err(UnknownChoice(s.to_string())),
        }
    }
}

/// Line-oriented menu loop over any reader and writer
pub struct Menu<R, W> {
    /// Where answers come from
    input: R,
    /// Where prompts and replies go
    output: W,
}

impl<R, W> fmt::Debug for Menu<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu").finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Menu reading from `input` and writing to `output`
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the output stream
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu and dispatch choices until Exit or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying streams.
    pub fn run(&mut self, engine: &mut LibraryEngine) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.ask("Choose an option: ")? else {
                tracing::debug!("input closed at the menu prompt");
                return self.say_goodbye();
            };

            match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::Signup) => {
                    let username = self.field("Username: ")?;
                    let password = self.field("Password: ")?;
                    self.show(&engine.signup(&username, &password))?;
                }
                Ok(MenuChoice::Login) => {
                    let username = self.field("Username: ")?;
                    let password = self.field("Password: ")?;
                    self.show(&engine.login(&username, &password))?;
                }
                Ok(MenuChoice::AddBook) => {
                    let isbn = self.field("ISBN: ")?;
                    let title = self.field("Title: ")?;
                    let author = self.field("Author: ")?;
                    let pages = parse_pages(&self.field("Pages (comma separated): ")?);
                    self.show(&engine.add_book(&isbn, &title, &author, pages))?;
                }
                Ok(MenuChoice::ReadBook) => {
                    let isbn = self.field("ISBN: ")?;
                    self.show(&engine.read_page(&isbn))?;
                }
                Ok(MenuChoice::Exit) => return self.say_goodbye(),
                Err(err) => {
                    tracing::debug!(%err, "rejected menu input");
                    writeln!(self.output, "{}", "Invalid option. Please enter 1-5.".yellow())?;
                }
            }
        }
    }

    /// Print the numbered entries
    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "--- Menu ---".bold())?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Prompt for a menu answer; `None` at end of input
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        prompt(&mut self.input, &mut self.output, label)
    }

    /// Prompt for a form field; end of input reads as empty
    fn field(&mut self, label: &str) -> io::Result<String> {
        prompt_or_empty(&mut self.input, &mut self.output, label)
    }

    /// Print an engine reply, coloured by outcome
    fn show(&mut self, reply: &Reply) -> io::Result<()> {
        if reply.success {
            writeln!(self.output, "{}", reply.message.green())
        } else {
            writeln!(self.output, "{}", reply.message.red())
        }
    }

    /// Final line before leaving the loop
    fn say_goodbye(&mut self) -> io::Result<()> {
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Signup));
        assert_eq!(" 4 ".parse::<MenuChoice>(), Ok(MenuChoice::ReadBook));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("99".parse::<MenuChoice>(), Err(UnknownChoice("99".to_string())));
        assert!("".parse::<MenuChoice>().is_err());
        assert!("6".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_keys_follow_menu_order() {
        let keys: String = MenuChoice::ALL.into_iter().map(MenuChoice::key).collect();
        assert_eq!(keys, "12345");
    }
}
