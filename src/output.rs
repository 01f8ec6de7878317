//! Terminal output for the menu loop

use crate::utils::SplitMode;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

pub const NO_MATCHES: &str = "No matching books found";
pub const LIST_HEADING: &str = "=== List of books ===";
pub const MENU_HEADING: &str = "=== Menu ===";

/// Print a heading line (menu title, list title)
pub fn print_heading<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}

/// Print a prompt or informational line
pub fn print_prompt<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)?;
    out.flush()
}

/// Print a warning line
pub fn print_warning<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}

/// Print every record under the list heading
pub fn print_all_records<W: WriteColor, S: AsRef<str>>(out: &mut W, records: &[S]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{}", NO_MATCHES);
    }

    print_heading(out, LIST_HEADING)?;
    for record in records {
        writeln!(out, "{}", record.as_ref())?;
    }
    Ok(())
}

/// Print search results, one per line, highlighting query words
pub fn print_search_results<W: WriteColor>(
    out: &mut W,
    results: &[&str],
    words: &[String],
    mode: SplitMode,
) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "{}", NO_MATCHES);
    }

    for record in results {
        print_match_line(out, record, words, mode)?;
    }
    Ok(())
}

/// Print a record, with words found in `words` highlighted.
/// Words are cut the way `mode` cuts them for the index; separators are
/// reproduced exactly.
fn print_match_line<W: WriteColor>(
    out: &mut W,
    record: &str,
    words: &[String],
    mode: SplitMode,
) -> io::Result<()> {
    let mut rest = record;
    loop {
        let end = rest.find(|c| is_separator(mode, c)).unwrap_or(rest.len());
        print_word(out, &rest[..end], words)?;

        let Some(separator) = rest[end..].chars().next() else {
            break;
        };
        write!(out, "{}", separator)?;
        rest = &rest[end + separator.len_utf8()..];
    }

    writeln!(out)
}

fn is_separator(mode: SplitMode, c: char) -> bool {
    match mode {
        SplitMode::Space => c == ' ',
        SplitMode::Whitespace => c.is_whitespace(),
    }
}

fn print_word<W: WriteColor>(out: &mut W, token: &str, words: &[String]) -> io::Result<()> {
    let lowered = token.to_lowercase();
    if !token.is_empty() && words.iter().any(|w| *w == lowered) {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", token)?;
        out.reset()
    } else {
        write!(out, "{}", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    fn plain<F>(f: F) -> String
    where
        F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_print_all_records() {
        let text = plain(|out| print_all_records(out, &["Dune", "Emma"]));
        assert_eq!(text, "=== List of books ===\nDune\nEmma\n");
    }

    #[test]
    fn test_print_all_records_empty() {
        let records: [&str; 0] = [];
        let text = plain(|out| print_all_records(out, &records));
        assert_eq!(text, "No matching books found\n");
    }

    #[test]
    fn test_print_search_results_plain() {
        let words = vec!["great".to_string()];
        let text = plain(|out| {
            print_search_results(
                out,
                &["The Great Gatsby", "Great  Expectations"],
                &words,
                SplitMode::Space,
            )
        });
        assert_eq!(text, "The Great Gatsby\nGreat  Expectations\n");
    }

    #[test]
    fn test_print_search_results_empty() {
        let text = plain(|out| print_search_results(out, &[], &[], SplitMode::Space));
        assert_eq!(text, "No matching books found\n");
    }

    #[test]
    fn test_highlight_uses_ansi() {
        let mut out = Ansi::new(Vec::new());
        let words = vec!["war".to_string()];
        print_search_results(&mut out, &["War and Peace"], &words, SplitMode::Space).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("War"));
        assert!(text.ends_with("and Peace\n"));
    }

    #[test]
    fn test_highlight_follows_split_mode() {
        let words = vec!["and".to_string()];
        let highlighted = |mode| {
            let mut out = Ansi::new(Vec::new());
            print_search_results(&mut out, &["War\tand Peace"], &words, mode).unwrap();
            String::from_utf8(out.into_inner()).unwrap()
        };

        let whitespace = highlighted(SplitMode::Whitespace);
        assert!(whitespace.starts_with("War\t\x1b["));
        assert!(whitespace.ends_with("and\x1b[0m Peace\n"));

        // Under single-space splitting "war\tand" is one word
        assert_eq!(highlighted(SplitMode::Space), "War\tand Peace\n");
    }

    #[test]
    fn test_whitespace_mode_keeps_text() {
        let words = vec!["gatsby".to_string()];
        let text = plain(|out| {
            print_search_results(out, &["The\t Great  Gatsby "], &words, SplitMode::Whitespace)
        });
        assert_eq!(text, "The\t Great  Gatsby \n");
    }
}
