use std::io::{self, BufRead, Write};

/// Print `label` without a newline and read one trimmed line.
///
/// Returns `Ok(None)` once the input is exhausted.
///
/// # Errors
///
/// Propagates failures from either stream, including input that is not
/// valid UTF-8.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], but end of input reads as an empty answer.
///
/// # Errors
///
/// Propagates failures from either stream.
pub fn prompt_or_empty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    Ok(prompt(input, output, label)?.unwrap_or_default())
}

/// Split a comma separated page list, trimming each page and dropping blanks
#[must_use]
pub fn parse_pages(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|page| !page.is_empty()).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompt_trims_and_echoes_label() -> io::Result<()> {
        let mut input = Cursor::new("   hello   \n");
        let mut output = Vec::new();
        let answer = prompt(&mut input, &mut output, "Enter something: ")?;
        assert_eq!(answer.as_deref(), Some("hello"));
        assert_eq!(output, b"Enter something: ");
        Ok(())
    }

    #[test]
    fn test_prompt_reports_end_of_input() -> io::Result<()> {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "> ")?, None);
        assert_eq!(prompt_or_empty(&mut input, &mut output, "> ")?, "");
        Ok(())
    }

    #[test]
    fn test_last_line_without_newline_is_read() -> io::Result<()> {
        let mut input = Cursor::new("first\nsecond");
        let mut output = io::sink();
        assert_eq!(prompt_or_empty(&mut input, &mut output, "")?, "first");
        assert_eq!(prompt_or_empty(&mut input, &mut output, "")?, "second");
        assert_eq!(prompt(&mut input, &mut output, "")?, None);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let mut output = io::sink();
        assert!(prompt(&mut input, &mut output, "").is_err());
    }

    #[test]
    fn test_parse_pages() {
        assert_eq!(parse_pages("Page1, Page2 ,, ,Page3"), vec!["Page1", "Page2", "Page3"]);
        assert_eq!(parse_pages("In a hole in the ground there lived a hobbit."), vec![
            "In a hole in the ground there lived a hobbit."
        ]);
        assert!(parse_pages(" , ").is_empty());
    }
}
