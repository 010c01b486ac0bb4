//! Console summary for dailyrings
//!
//! Prints metric names and their values as two rows, each item centered
//! in an equal share of the terminal width.

use std::io::{self, IsTerminal, Write};

use crate::errors::{DailyError, Result};
use crate::metrics::Score;

/// Shown in place of a score that could not be fetched
pub const ABSENT_MARKER: &str = "-";

/// Current width of the terminal attached to stdout, in columns
pub fn terminal_width() -> Result<u16> {
    terminal_width_for(&io::stdout())
}

/// Width of the terminal behind `stream`
///
/// Fails when `stream` is not a terminal. crossterm would otherwise fall
/// back to `/dev/tty` or `tput cols` and report a width for a pipe.
pub fn terminal_width_for<S: IsTerminal>(stream: &S) -> Result<u16> {
    if !stream.is_terminal() {
        return Err(DailyError::TerminalError(
            "output is not attached to a terminal".to_string(),
        ));
    }

    crossterm::terminal::size()
        .map(|(columns, _rows)| columns)
        .map_err(|e| DailyError::TerminalError(format!("Failed to query terminal size: {}", e)))
}

/// Equal column share for `count` items (integer division)
pub fn column_width(total_width: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    total_width / count
}

/// Center `text` in `width` columns
///
/// An odd margin puts the extra space on the right, unless the width is
/// odd too, in which case it goes on the left. Text wider than `width`
/// is returned as is.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Render a score for display
pub fn score_label(score: &Score) -> String {
    match score {
        Some(value) => value.to_string(),
        None => ABSENT_MARKER.to_string(),
    }
}

/// Build the names row and the values row
pub fn format_summary(names: &[String], scores: &[Score], total_width: usize) -> [String; 2] {
    let width = column_width(total_width, names.len());

    let names_row: String = names.iter().map(|name| center(name, width)).collect();
    let values_row: String = scores
        .iter()
        .map(|score| center(&score_label(score), width))
        .collect();

    [names_row, values_row]
}

/// Write a blank line followed by the two summary rows
pub fn write_summary<W: Write>(
    out: &mut W,
    names: &[String],
    scores: &[Score],
    total_width: usize,
) -> io::Result<()> {
    let [names_row, values_row] = format_summary(names, scores, total_width);
    writeln!(out)?;
    writeln!(out, "{}", names_row)?;
    writeln!(out, "{}", values_row)?;
    out.flush()
}

/// Print the summary to stdout
pub fn print_summary(names: &[String], scores: &[Score], total_width: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, names, scores, total_width)?;
    Ok(())
}
