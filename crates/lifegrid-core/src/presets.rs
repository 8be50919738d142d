//! Built-in patterns, pattern-file loading, and first-generation seeding.
//!
//! Patterns are stored in the text grid format with `.` as the dead cell.
//! Pattern text, whether built in or read from a file, is always decoded
//! with `.` as the dead character; only the minimum-size padding is taken
//! from the caller's [`CodecOptions`].

use std::path::{Path, PathBuf};

use lifegrid_engine::{CodecOptions, Grid, GridError, decode, random_grid, seeded_grid};
use tracing::debug;

use crate::config::SeedConfig;

/// Dead character used by every pattern source.
pub const PATTERN_DEAD_CHAR: char = '.';

/// Errors that can occur while loading a pattern.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// No built-in preset has the requested name.
    #[error("unknown preset {name:?} (available: {available})")]
    UnknownPreset {
        /// The requested name.
        name: String,
        /// Comma-separated list of known presets.
        available: String,
    },

    /// The pattern file could not be read.
    #[error("failed to read pattern file {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The pattern text did not decode into a grid.
    #[error("invalid pattern: {source}")]
    Grid {
        /// The underlying grid error.
        #[from]
        source: GridError,
    },
}

/// A named built-in pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Lookup name, lowercase with hyphens.
    pub name: &'static str,
    /// Pattern text with `.` for dead cells.
    pub pattern: &'static str,
}

/// All built-in patterns.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "blinker",
        pattern: "\
.....
..*..
..*..
..*..
.....
",
    },
    Preset {
        name: "toad",
        pattern: "\
......
......
..***.
.***..
......
......
",
    },
    Preset {
        name: "beacon",
        pattern: "\
......
.**...
.**...
...**.
...**.
......
",
    },
    Preset {
        name: "glider",
        pattern: "\
.*........
..*.......
***.......
..........
..........
..........
..........
..........
..........
..........
",
    },
    Preset {
        name: "r-pentomino",
        pattern: "\
.....
..**.
.**..
..*..
.....
",
    },
    Preset {
        name: "pulsar",
        pattern: "\
.................
.................
....***...***....
.................
..*....*.*....*..
..*....*.*....*..
..*....*.*....*..
....***...***....
.................
....***...***....
..*....*.*....*..
..*....*.*....*..
..*....*.*....*..
.................
....***...***....
.................
.................
",
    },
    Preset {
        name: "gosper-glider-gun",
        pattern: "\
........................*...........
......................*.*...........
............**......**............**
...........*...*....**............**
**........*.....*...**..............
**........*...*.**....*.*...........
..........*.....*.......*...........
...........*...*....................
............**......................
",
    },
];

/// Look up a preset by name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Comma-separated preset names, for error messages and logs.
pub fn preset_names() -> String {
    PRESETS
        .iter()
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode pattern text with the fixed `.` dead character, padded to the
/// minimums in `options`.
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] if the text holds no rows.
pub fn decode_pattern(text: &str, options: &CodecOptions) -> Result<Grid, GridError> {
    let pattern_options = CodecOptions {
        dead_char: PATTERN_DEAD_CHAR,
        ..*options
    };
    decode(text, &pattern_options)
}

/// Build the grid for a named preset.
///
/// # Errors
///
/// Returns [`PresetError::UnknownPreset`] if no preset matches `name`.
pub fn load_preset(name: &str, options: &CodecOptions) -> Result<Grid, PresetError> {
    let preset = find_preset(name).ok_or_else(|| PresetError::UnknownPreset {
        name: name.to_owned(),
        available: preset_names(),
    })?;
    debug!(preset = preset.name, "loading built-in pattern");
    Ok(decode_pattern(preset.pattern, options)?)
}

/// Read and decode a pattern file.
///
/// # Errors
///
/// Returns [`PresetError::Io`] if the file cannot be read and
/// [`PresetError::Grid`] if it contains no rows.
pub fn load_pattern_file(path: &Path, options: &CodecOptions) -> Result<Grid, PresetError> {
    let text = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loading pattern file");
    Ok(decode_pattern(&text, options)?)
}

/// Build the first generation described by `seed`.
///
/// Random grids use `rng_seed` when set, so the same config reproduces the
/// same run. All sources honor the padding minimums in `options`.
///
/// # Errors
///
/// Returns [`PresetError`] if the preset is unknown, the file cannot be
/// read or decoded, or the random dimensions are zero.
pub fn initial_grid(seed: &SeedConfig, options: &CodecOptions) -> Result<Grid, PresetError> {
    match seed {
        SeedConfig::Random {
            width,
            height,
            probability,
            rng_seed: Some(rng_seed),
        } => Ok(seeded_grid(*width, *height, *probability, options, *rng_seed)?),
        SeedConfig::Random {
            width,
            height,
            probability,
            rng_seed: None,
        } => Ok(random_grid(*width, *height, *probability, options)?),
        SeedConfig::Preset { name } => load_preset(name, options),
        SeedConfig::File { path } => load_pattern_file(path, options),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lifegrid_engine::{Step, step};

    use super::*;

    /// Step `grid` `n` times, panicking if it stabilizes first.
    fn advance(grid: &Grid, n: usize) -> Grid {
        let mut current = grid.clone();
        for _ in 0..n {
            current = step(&current).into_grid().unwrap();
        }
        current
    }

    #[test]
    fn every_preset_decodes_rectangular() {
        for preset in PRESETS {
            let grid = load_preset(preset.name, &CodecOptions::default()).unwrap();
            let lines: Vec<&str> = preset.pattern.lines().collect();
            assert_eq!(grid.height(), lines.len(), "{}", preset.name);
            assert!(
                lines.iter().all(|l| l.len() == grid.width()),
                "{} has ragged rows",
                preset.name
            );
            assert!(grid.live_count() > 0, "{}", preset.name);
        }
    }

    #[test]
    fn oscillators_return_to_start() {
        let opts = CodecOptions::default();
        for (name, period) in [("blinker", 2), ("toad", 2), ("beacon", 2), ("pulsar", 3)] {
            let grid = load_preset(name, &opts).unwrap();
            assert_ne!(step(&grid), Step::Stable, "{name}");
            assert_eq!(advance(&grid, period), grid, "{name}");
        }
    }

    #[test]
    fn glider_gun_keeps_changing() {
        let grid = load_preset("gosper-glider-gun", &CodecOptions::default()).unwrap();
        let later = advance(&grid, 30);
        assert_eq!((later.width(), later.height()), (36, 9));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(find_preset(" Glider ").map(|p| p.name), Some("glider"));
        assert_eq!(find_preset("R-PENTOMINO").map(|p| p.name), Some("r-pentomino"));
    }

    #[test]
    fn unknown_preset_lists_available() {
        let err = load_preset("spaceship-9000", &CodecOptions::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("spaceship-9000"));
        assert!(message.contains("glider"));
    }

    #[test]
    fn patterns_ignore_configured_dead_char() {
        let opts = CodecOptions {
            dead_char: ' ',
            alive_char: '#',
            min_width: 8,
            min_height: 7,
        };
        let grid = load_preset("blinker", &opts).unwrap();
        assert_eq!(grid.live_count(), 3);
        assert_eq!((grid.width(), grid.height()), (8, 7));
    }

    #[test]
    fn loads_pattern_from_file() {
        let path = std::env::temp_dir().join(format!(
            "lifegrid-pattern-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "\n.*.\n.*.\n.*.\n\n").unwrap();
        let grid = load_pattern_file(&path, &CodecOptions::default()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/nonexistent/lifegrid/pattern.txt");
        let err = load_pattern_file(path, &CodecOptions::default()).unwrap_err();
        assert!(matches!(err, PresetError::Io { .. }));
    }

    #[test]
    fn empty_file_is_grid_error() {
        let err = decode_pattern("\n\n", &CodecOptions::default()).unwrap_err();
        assert_eq!(err, GridError::EmptyInput);
    }

    #[test]
    fn initial_grid_from_each_source() {
        let opts = CodecOptions::default();

        let preset = initial_grid(
            &SeedConfig::Preset {
                name: String::from("toad"),
            },
            &opts,
        )
        .unwrap();
        assert_eq!(preset.live_count(), 6);

        let random = initial_grid(
            &SeedConfig::Random {
                width: 7,
                height: 3,
                probability: 1.0,
                rng_seed: None,
            },
            &opts,
        )
        .unwrap();
        assert_eq!(random.live_count(), 21);

        let missing = initial_grid(
            &SeedConfig::File {
                path: PathBuf::from("/nonexistent/lifegrid/seed.txt"),
            },
            &opts,
        );
        assert!(matches!(missing, Err(PresetError::Io { .. })));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let seed = SeedConfig::Random {
            width: 16,
            height: 16,
            probability: 0.4,
            rng_seed: Some(1234),
        };
        let opts = CodecOptions::default();
        assert_eq!(
            initial_grid(&seed, &opts).unwrap(),
            initial_grid(&seed, &opts).unwrap()
        );
    }
}
