//! Command dispatch and menu handlers
//!
//! The menu loop owns the store. Handlers report engine errors to the
//! user and log them; nothing here aborts the loop except Exit or a
//! closed input stream.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::catalog::RecordStore;
use crate::model::Record;
use crate::observability::Logger;
use crate::query::{RecordSearch, RecordSorter, SearchMatches};
use crate::textfile::{reader, writer};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{read_date, read_direction, read_int, read_line, read_record};
use super::menu::{MenuAction, MENU};

/// CLI entry point: parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Some(Command::Dump { file }) => dump(&file),
        Some(Command::Menu { file }) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            run_menu(&mut input, &mut output, file.as_deref())
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            run_menu(&mut input, &mut output, None)
        }
    }
}

/// One-shot: load a data file and print its records as a JSON array.
pub fn dump(path: &Path) -> CliResult<()> {
    let mut store = RecordStore::new();
    let count = reader::load_from_path(&mut store, path)?;
    Logger::info(
        "dump",
        &[("file", &path.display().to_string()), ("count", &count.to_string())],
    );

    let json = serde_json::to_string_pretty(store.records())?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// The interactive menu loop.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    preload: Option<&Path>,
) -> CliResult<()> {
    let mut store = RecordStore::new();

    writeln!(output, "=== Repository record store ===")?;

    if let Some(path) = preload {
        handle_load_path(output, &mut store, path)?;
    }

    loop {
        let choice = read_int(input, output, MENU)?;
        match MenuAction::from_choice(choice) {
            Some(MenuAction::Load) => handle_load(input, output, &mut store)?,
            Some(MenuAction::ListAll) => print_all(output, &store)?,
            Some(MenuAction::SearchByDirection) => {
                handle_search_direction(input, output, &store)?
            }
            Some(MenuAction::SearchCombined) => handle_search_combined(input, output, &store)?,
            Some(MenuAction::Sort) => handle_sort(output, &mut store)?,
            Some(MenuAction::Add) => handle_add(input, output, &mut store)?,
            Some(MenuAction::Save) => handle_save(input, output, &store)?,
            Some(MenuAction::Exit) => {
                writeln!(output, "\nBye.")?;
                return Ok(());
            }
            None => writeln!(output, "Invalid choice")?,
        }
    }
}

fn handle_load<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut RecordStore,
) -> CliResult<()> {
    let filename = read_line(input, output, "File to load: ")?;
    handle_load_path(output, store, Path::new(&filename))
}

fn handle_load_path<W: Write>(
    output: &mut W,
    store: &mut RecordStore,
    path: &Path,
) -> CliResult<()> {
    match reader::load_from_path(store, path) {
        Ok(count) => {
            writeln!(output, "Loaded {count} records")?;
            Logger::info(
                "load_ok",
                &[
                    ("file", &path.display().to_string()),
                    ("count", &count.to_string()),
                ],
            );
        }
        Err(e) => {
            writeln!(output, "Load failed: {e}")?;
            Logger::error(
                "load_failed",
                &[
                    ("file", &path.display().to_string()),
                    ("reason", &e.to_string()),
                ],
            );
        }
    }
    Ok(())
}

fn print_record<W: Write>(output: &mut W, record: &Record, number: usize) -> CliResult<()> {
    writeln!(output, "\n--- Record {number} ---")?;
    writeln!(output, "Direction: {}", record.direction())?;
    writeln!(output, "Site: {}", record.site())?;
    writeln!(output, "Name: {}", record.name())?;
    writeln!(output, "Size: {} KB", record.size())?;
    writeln!(output, "Released: {}", record.release_date())?;
    writeln!(output, "Dependencies: {}", record.dependencies())?;
    writeln!(output, "Compatibility: {}", record.compatibility())?;
    Ok(())
}

fn print_all<W: Write>(output: &mut W, store: &RecordStore) -> CliResult<()> {
    if store.is_empty() {
        writeln!(output, "\nStore is empty.")?;
        return Ok(());
    }

    writeln!(output, "\n=== All records ({}) ===", store.len())?;
    for (position, record) in store.iter().enumerate() {
        print_record(output, record, position + 1)?;
    }
    Ok(())
}

fn print_matches<W: Write>(
    output: &mut W,
    store: &RecordStore,
    matches: &SearchMatches,
) -> CliResult<()> {
    if matches.is_empty() {
        writeln!(output, "No records found")?;
        return Ok(());
    }

    for position in matches.iter() {
        if let Some(record) = store.get(position) {
            print_record(output, record, position + 1)?;
        }
    }
    writeln!(output, "\nFound: {}", matches.len())?;
    Ok(())
}

fn handle_search_direction<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &RecordStore,
) -> CliResult<()> {
    if store.is_empty() {
        writeln!(output, "\nStore is empty.")?;
        return Ok(());
    }

    writeln!(output, "\n--- Search by direction ---")?;
    let direction = read_direction(input, output)?;

    let matches = RecordSearch::by_direction(store, direction);
    writeln!(output, "\n=== Search results ===\nDirection: {direction}")?;
    print_matches(output, store, &matches)
}

fn handle_search_combined<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &RecordStore,
) -> CliResult<()> {
    if store.is_empty() {
        writeln!(output, "\nStore is empty.")?;
        return Ok(());
    }

    writeln!(output, "\n--- Combined search (release date AND size) ---")?;
    writeln!(output, "Release date:")?;
    let date = read_date(input, output)?;
    let size = read_int(input, output, "Size (KB): ")?;

    let matches = RecordSearch::by_date_and_size(store, date, size);
    writeln!(
        output,
        "\n=== Results ===\nConditions: date = {date} AND size = {size} KB"
    )?;
    print_matches(output, store, &matches)
}

fn handle_sort<W: Write>(output: &mut W, store: &mut RecordStore) -> CliResult<()> {
    if store.is_empty() {
        writeln!(output, "\nStore is empty.")?;
        return Ok(());
    }

    writeln!(
        output,
        "\n--- Sort: name -> direction -> release date (desc) ---"
    )?;
    RecordSorter::sort(store);
    Logger::info("sort", &[("count", &store.len().to_string())]);
    writeln!(output, "Sorted.")?;
    print_all(output, store)
}

fn handle_add<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut RecordStore,
) -> CliResult<()> {
    let record = read_record(input, output)?;
    match store.add(record) {
        Ok(()) => writeln!(output, "\nRecord added.")?,
        Err(e) => {
            writeln!(output, "Add failed: {e}")?;
            Logger::error("add_failed", &[("reason", &e.to_string())]);
        }
    }
    Ok(())
}

fn handle_save<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &RecordStore,
) -> CliResult<()> {
    if store.is_empty() {
        writeln!(output, "Nothing to save.")?;
        return Ok(());
    }

    let filename = read_line(input, output, "File to save: ")?;
    match writer::save_to_path(store, Path::new(&filename)) {
        Ok(()) => {
            writeln!(output, "Saved {} records to '{filename}'", store.len())?;
            Logger::info(
                "save_ok",
                &[("file", &filename), ("count", &store.len().to_string())],
            );
        }
        Err(e) => {
            writeln!(output, "Save failed: {e}")?;
            Logger::error(
                "save_failed",
                &[("file", &filename), ("reason", &e.to_string())],
            );
        }
    }
    Ok(())
}
