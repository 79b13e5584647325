//! Interactive prompt helpers
//!
//! All helpers are generic over `BufRead`/`Write` so they can be driven
//! from in-memory buffers in tests. Invalid input re-prompts; only a
//! closed input stream is an error.

use std::io::{self, BufRead, Write};

use crate::model::{Compatibility, Direction, Record, ReleaseDate, MAX_FIELD_BYTES};

use super::errors::CliResult;

/// Prompts and reads one line, without the trailing newline.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> CliResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Reads an integer, re-prompting until one parses.
pub fn read_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> CliResult<i64> {
    let mut line = read_line(input, output, prompt)?;
    loop {
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => line = read_line(input, output, "Not a number, try again: ")?,
        }
    }
}

/// Reads an integer in `[1, max]`, re-prompting while out of range.
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    max: i64,
) -> CliResult<i64> {
    let mut choice = read_int(input, output, prompt)?;
    while choice < 1 || choice > max {
        choice = read_int(input, output, &format!("Enter a number from 1 to {max}: "))?;
    }
    Ok(choice)
}

/// Reads day, month, year and re-asks until the date is calendar-valid.
pub fn read_date<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<ReleaseDate> {
    loop {
        let day = read_int(input, output, "Day (1-31): ")?;
        let month = read_int(input, output, "Month (1-12): ")?;
        let year = read_int(input, output, "Year (1900-2100): ")?;

        let date = ReleaseDate::new(day as i32, month as i32, year as i32);
        if date.is_valid() {
            return Ok(date);
        }
        writeln!(output, "Invalid date, try again.")?;
    }
}

/// Numbered direction picker.
pub fn read_direction<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<Direction> {
    writeln!(output, "\nChoose a direction:")?;
    for (i, d) in Direction::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, d)?;
    }
    let n = Direction::ALL.len() as i64;
    let choice = read_choice(input, output, &format!("Choice (1-{n}): "), n)?;
    Ok(Direction::ALL[(choice - 1) as usize])
}

/// Numbered compatibility picker.
pub fn read_compatibility<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> CliResult<Compatibility> {
    writeln!(output, "\nChoose a compatibility:")?;
    for (i, c) in Compatibility::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, c)?;
    }
    let n = Compatibility::ALL.len() as i64;
    let choice = read_choice(input, output, &format!("Choice (1-{n}): "), n)?;
    Ok(Compatibility::ALL[(choice - 1) as usize])
}

/// Reads a bounded text field, re-asking while it is too long.
fn read_text_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> CliResult<String> {
    let mut value = read_line(input, output, prompt)?;
    while value.len() > MAX_FIELD_BYTES {
        value = read_line(
            input,
            output,
            &format!("At most {MAX_FIELD_BYTES} bytes, try again: "),
        )?;
    }
    Ok(value)
}

/// Interactive record entry: every field is re-asked until valid.
pub fn read_record<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<Record> {
    writeln!(output, "\n--- Add a record ---")?;

    let direction = read_direction(input, output)?;
    let site = read_text_field(input, output, "\nSite: ")?;
    let name = read_text_field(input, output, "Name: ")?;

    let mut size = read_int(input, output, "Size (KB, > 0): ")?;
    while size <= 0 {
        size = read_int(input, output, "Size must be > 0: ")?;
    }

    writeln!(output, "\nRelease date:")?;
    let release_date = read_date(input, output)?;

    let mut dependencies = read_int(input, output, "\nDependencies (>= 0): ")?;
    while dependencies < 0 {
        dependencies = read_int(input, output, "Dependencies must be >= 0: ")?;
    }

    let compatibility = read_compatibility(input, output)?;

    let record = Record::new(
        direction,
        site,
        name,
        size,
        release_date,
        dependencies,
        compatibility,
    )?;
    Ok(record)
}
