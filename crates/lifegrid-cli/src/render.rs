//! Terminal rendering of generations.

use std::io::Write;

use lifegrid_core::runner::GenerationCallback;
use lifegrid_engine::{CodecOptions, Grid, encode};

/// ANSI sequence: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes each generation to `out` using the configured cell characters.
///
/// When `clear_screen` is off, generations are separated by a blank line
/// so the output stays readable when piped to a file.
pub struct TerminalRenderer<W> {
    out: W,
    options: CodecOptions,
    clear_screen: bool,
}

impl<W: Write + Send> TerminalRenderer<W> {
    /// Create a renderer writing to `out`.
    pub const fn new(out: W, options: CodecOptions, clear_screen: bool) -> Self {
        Self {
            out,
            options,
            clear_screen,
        }
    }

    /// Consume the renderer and return the writer.
    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> GenerationCallback for TerminalRenderer<W> {
    fn on_generation(&mut self, generation: u64, grid: &Grid) -> std::io::Result<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        } else if generation > 0 {
            frame.push('\n');
        }
        frame.push_str(&encode(grid, &self.options));
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
