//! Line-based text format for boards and tile masks.
//!
//! A layout lists one line per row, **top row first**, so it reads the way the
//! board looks on screen. Whitespace inside a line and blank lines are ignored,
//! which lets layouts be written as indented string literals. Every row must
//! have the same number of cells.
//!
//! The meaning of each character is up to the caller; this module only handles
//! the shape and the row orientation.

use std::fmt;

use crate::{Dimensions, Position};

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLayoutError {
    /// The input contains no cells.
    #[display("layout has no rows")]
    Empty,
    /// A line has a different number of cells than the first line.
    #[display("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based line index, counted from the top.
        line: usize,
        /// Number of cells in the first line.
        expected: usize,
        /// Number of cells in this line.
        found: usize,
    },
    /// A character is not valid for this kind of layout.
    #[display("invalid cell {ch:?} at line {line}, column {column}")]
    InvalidChar {
        /// Zero-based line index, counted from the top.
        line: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending character.
        ch: char,
    },
}

/// Parses a layout into its dimensions and cells.
///
/// `parse_cell` maps one character to a cell value, returning `None` for
/// characters it does not accept. Cells are returned in raster order (see
/// [`Dimensions::positions`]), bottom row first.
///
/// # Errors
///
/// Returns [`ParseLayoutError`] if the input is empty, ragged, or contains a
/// character rejected by `parse_cell`.
///
/// # Examples
///
/// ```
/// use windup_core::{Dimensions, layout};
///
/// let (dims, cells) = layout::parse("ab\ncd", |ch| Some(ch))?;
/// assert_eq!(dims, Dimensions::new(2, 2));
/// assert_eq!(cells, ['c', 'd', 'a', 'b']);
/// # Ok::<(), windup_core::ParseLayoutError>(())
/// ```
pub fn parse<T, F>(s: &str, mut parse_cell: F) -> Result<(Dimensions, Vec<T>), ParseLayoutError>
where
    F: FnMut(char) -> Option<T>,
{
    let lines: Vec<Vec<char>> = s
        .lines()
        .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
        .filter(|line| !line.is_empty())
        .collect();

    let expected = lines.first().map(Vec::len).ok_or(ParseLayoutError::Empty)?;

    let mut rows = Vec::with_capacity(lines.len());
    for (line, chars) in lines.iter().enumerate() {
        if chars.len() != expected {
            return Err(ParseLayoutError::RaggedRow {
                line,
                expected,
                found: chars.len(),
            });
        }
        let row = chars
            .iter()
            .enumerate()
            .map(|(column, &ch)| {
                parse_cell(ch).ok_or(ParseLayoutError::InvalidChar { line, column, ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    let dimensions = Dimensions::new(expected, rows.len());
    let cells = rows.into_iter().rev().flatten().collect();
    Ok((dimensions, cells))
}

/// Writes a layout, top row first, one line per row.
///
/// # Errors
///
/// Propagates errors from the formatter.
pub fn write<F>(f: &mut fmt::Formatter<'_>, dimensions: Dimensions, mut symbol: F) -> fmt::Result
where
    F: FnMut(Position) -> char,
{
    for row in (0..dimensions.rows()).rev() {
        for column in 0..dimensions.columns() {
            write!(f, "{}", symbol(Position::new(column, row)))?;
        }
        if row > 0 {
            writeln!(f)?;
        }
    }
    Ok(())
}
