//! Text codec: grid state to and from strings.
//!
//! # Format
//!
//! - Rows are separated by `\n`; a trailing `\r` on a row is dropped.
//! - The configured dead character is a dead cell. **Every other character
//!   is alive**, not only the configured alive character, so free-form
//!   pattern files decode without a character map.
//! - Empty lines before the first row and after the last row are ignored.
//!   Empty lines between rows become all-dead rows.
//! - Short rows are right-padded with dead cells to the widest row, or to
//!   `min_width` if that is larger. Missing rows up to `min_height` are
//!   appended at the bottom, all dead.
//!
//! [`encode`] writes one line per row, each terminated by `\n`, using the
//! configured alive and dead characters. [`decode`] accepts that trailing
//! newline, so `decode(encode(g))` with matching characters returns `g`.

use std::fmt;

use serde::Deserialize;

use crate::error::GridError;
use crate::grid::Grid;

/// Characters and minimum dimensions used by [`decode`], [`encode`], and
/// [`random`](crate::generator::random).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CodecOptions {
    /// Character read and written as a dead cell.
    #[serde(default = "default_dead_char")]
    pub dead_char: char,

    /// Character written for a live cell.
    #[serde(default = "default_alive_char")]
    pub alive_char: char,

    /// Minimum grid width; narrower grids are padded on the right.
    #[serde(default)]
    pub min_width: usize,

    /// Minimum grid height; shorter grids are padded at the bottom.
    #[serde(default)]
    pub min_height: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            dead_char: default_dead_char(),
            alive_char: default_alive_char(),
            min_width: 0,
            min_height: 0,
        }
    }
}

impl CodecOptions {
    /// Options with the given dead character and defaults elsewhere.
    pub fn with_dead_char(dead_char: char) -> Self {
        Self {
            dead_char,
            ..Self::default()
        }
    }
}

const fn default_dead_char() -> char {
    '.'
}

const fn default_alive_char() -> char {
    '*'
}

/// Parse `text` into a grid.
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] if `text` holds no rows after leading
/// and trailing empty lines are dropped.
pub fn decode(text: &str, options: &CodecOptions) -> Result<Grid, GridError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let first = lines
        .iter()
        .position(|line| !line.is_empty())
        .ok_or(GridError::EmptyInput)?;
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);
    let rows = lines.get(first..=last).unwrap_or_default();

    let longest = rows
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = longest.max(options.min_width);

    let decoded = rows
        .iter()
        .map(|line| {
            let mut row: Vec<bool> = line.chars().map(|c| c != options.dead_char).collect();
            row.resize(width, false);
            row
        })
        .collect();

    Grid::from_rows(decoded)?.padded(0, options.min_height)
}

/// Render `grid` as text, one `\n`-terminated line per row.
pub fn encode(grid: &Grid, options: &CodecOptions) -> String {
    let line_len = grid.width().saturating_add(1);
    let mut out = String::with_capacity(line_len.saturating_mul(grid.height()));
    for row in grid.rows() {
        out.extend(row.iter().map(|&alive| {
            if alive {
                options.alive_char
            } else {
                options.dead_char
            }
        }));
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self, &CodecOptions::default()))
    }
}
