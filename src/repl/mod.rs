//! Interactive menu loop.
//!
//! The loop owns no global state: it reads lines from any [`BufRead`] and
//! writes to any [`WriteColor`], so it runs the same against a terminal or
//! against in-memory buffers in tests.

mod menu;

pub use menu::{parse_choice, Choice, MenuAction, MenuEntry, MAIN_MENU};

use crate::engine::SearchEngine;
use crate::output::{
    print_all_records, print_heading, print_prompt, print_search_results, print_warning,
    MENU_HEADING,
};
use crate::query::parse_strategy;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use termcolor::WriteColor;
use tracing::debug;

pub const QUERY_PROMPT: &str = "Enter title or author name to search books:";
pub const STRATEGY_PROMPT: &str = "Select a matching strategy: ALL, ANY, NONE";
pub const BAD_OPTION: &str = "Incorrect option! Try again.";
pub const FAREWELL: &str = "Bye!";

enum Flow {
    Continue,
    Exit,
}

/// Run the default menu until the user exits or input ends
pub fn run<R: BufRead, W: WriteColor>(engine: &SearchEngine, input: R, output: W) -> Result<()> {
    run_with_menu(engine, &MAIN_MENU, input, output)
}

/// Run the loop with an explicit menu
pub fn run_with_menu<R: BufRead, W: WriteColor>(
    engine: &SearchEngine,
    menu: &[MenuEntry],
    mut input: R,
    mut output: W,
) -> Result<()> {
    loop {
        show_menu(&mut output, menu)?;

        let action = match read_choice(menu, &mut input, &mut output)? {
            Some(action) => action,
            None => MenuAction::Exit,
        };
        debug!(?action, "menu choice");

        match dispatch(action, engine, &mut input, &mut output)? {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

fn show_menu<W: WriteColor>(output: &mut W, menu: &[MenuEntry]) -> Result<()> {
    print_heading(output, MENU_HEADING)?;
    for entry in menu {
        writeln!(output, "{}. {}", entry.key, entry.label)?;
    }
    output.flush()?;
    Ok(())
}

/// Read lines until one names a menu entry. `None` at end of input.
fn read_choice<R: BufRead, W: WriteColor>(
    menu: &[MenuEntry],
    input: &mut R,
    output: &mut W,
) -> Result<Option<MenuAction>> {
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_choice(menu, &line) {
            Choice::Selected(action) => return Ok(Some(action)),
            Choice::OutOfRange => print_warning(output, BAD_OPTION)?,
            Choice::Ignored => {}
        }
    }
}

fn dispatch<R: BufRead, W: WriteColor>(
    action: MenuAction,
    engine: &SearchEngine,
    input: &mut R,
    output: &mut W,
) -> Result<Flow> {
    match action {
        MenuAction::Search => search(engine, input, output),
        MenuAction::ListAll => {
            print_all_records(output, engine.records())?;
            Ok(Flow::Continue)
        }
        MenuAction::Exit => {
            writeln!(output, "{}", FAREWELL)?;
            Ok(Flow::Exit)
        }
    }
}

fn search<R: BufRead, W: WriteColor>(
    engine: &SearchEngine,
    input: &mut R,
    output: &mut W,
) -> Result<Flow> {
    print_prompt(output, QUERY_PROMPT)?;
    let Some(query_line) = read_line(input)? else {
        return dispatch(MenuAction::Exit, engine, input, output);
    };

    print_prompt(output, STRATEGY_PROMPT)?;
    let Some(strategy_line) = read_line(input)? else {
        return dispatch(MenuAction::Exit, engine, input, output);
    };

    let query = engine.parse_query(&query_line);
    let strategy = parse_strategy(&strategy_line);
    let results = engine.search(&strategy, &query);

    print_search_results(output, &results, &query.words, engine.options().split_mode)?;
    Ok(Flow::Continue)
}

/// One line without its terminator, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
