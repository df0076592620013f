use gemba_core::enums::ScoreStatus;
use gemba_core::policy::ScoreThresholds;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
    /// Bands for coloring numeric cells in `*score` columns.
    pub bands: ScoreThresholds,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned table; numeric cells are right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, looks_numeric(&cell));
                if options.color {
                    let header = headers.get(index).copied().unwrap_or_default();
                    colorize(header, &cell, padded, &options.bands)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(SEPARATOR));
    }
    lines.join("\n")
}

/// Narrow the widest column one step at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Color score cells by band and status words by meaning; everything else
/// is left alone.
fn colorize(header: &str, plain: &str, padded: String, bands: &ScoreThresholds) -> String {
    let value = plain.trim();
    let score = header
        .ends_with("score")
        .then(|| value.parse::<f64>().ok())
        .flatten();
    let code = match score.map(|s| ScoreStatus::classify(Some(s), bands)) {
        Some(ScoreStatus::Excellent) => "32",
        Some(ScoreStatus::Good) => "33",
        Some(ScoreStatus::Critical) => "31",
        Some(ScoreStatus::NotApplicable) => return padded,
        None => match value {
            "excellent" | "approved" | "true" => "32",
            "good" | "pending" | "executed" => "33",
            "critical" | "rejected" | "false" => "31",
            _ => return padded,
        },
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
