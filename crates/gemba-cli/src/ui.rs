//! Terminal presentation settings resolved once per run.
//!
//! Score cells in tables are colored by the project's configured bands, so a
//! department scoring 8.6 reads green in a plant that sets "excellent" at 8.5
//! and yellow under the default 9.0.

use std::io::IsTerminal;
use std::sync::OnceLock;

use gemba_core::policy::ScoreThresholds;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals fall back to unbounded tables.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub color: bool,
    pub width: Option<usize>,
    pub bands: ScoreThresholds,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            color: false,
            width: None,
            bands: ScoreThresholds::default(),
        }
    }
}

static PRESENTATION: OnceLock<Presentation> = OnceLock::new();

/// Resolve presentation from the flags, the environment and the score bands.
pub fn init(flags: &GlobalFlags, bands: ScoreThresholds) {
    let color = wants_color(
        flags.color,
        flags.format,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    let width = term_width(std::env::var("COLUMNS").ok().as_deref());
    if PRESENTATION.set(Presentation { color, width, bands }).is_err() {
        tracing::debug!("presentation already initialized");
    }
}

#[must_use]
pub fn current() -> Presentation {
    PRESENTATION.get().copied().unwrap_or_default()
}

/// Color only ever applies to tables; `auto` also needs a tty and no `NO_COLOR`.
const fn wants_color(mode: ColorMode, format: OutputFormat, tty: bool, no_color: bool) -> bool {
    let table = matches!(format, OutputFormat::Table);
    match mode {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => table && tty && !no_color,
    }
}

fn term_width(columns: Option<&str>) -> Option<usize> {
    columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH)
}
