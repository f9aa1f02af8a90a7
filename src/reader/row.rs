//! Row and cell parsing: timestamp coercion and tagged cell outcomes.
//!
//! Parsing never raises on data quality. Whole-row rejections come back as
//! [`RowSkip`], per-cell rejections as [`CellOutcome::Skipped`]; the reader
//! aggregates both into its skip counters.

use chrono::NaiveDateTime;

/// Accepted `"<date> <time>"` layouts, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S%.3f", // 13.08.2025 10:00:00.000
    "%d.%m.%Y %H:%M:%S",     // 13.08.2025 10:00:00
];

/// Why a whole row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSkip {
    /// Column count does not match the header.
    ShapeMismatch,
    /// Date+time failed every accepted format.
    BadTimestamp,
}

/// Why one cell produced no reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSkip {
    /// Not a decimal number.
    BadNumber,
    /// A Yes/No column holding neither literal token.
    BadBoolean,
    /// NaN or infinite; never surfaced to statistics.
    NonFinite,
}

/// Outcome of coercing one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellOutcome {
    Value(f64),
    /// Empty cells are normal absence, not an error.
    Empty,
    Skipped(CellSkip),
}

/// A data row with its timestamp parsed and every cell tagged.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub timestamp: NaiveDateTime,
    /// One outcome per data column, in header order.
    pub cells: Vec<CellOutcome>,
}

/// Parse one tokenized row against the header's column layout.
///
/// `fields` is the full record (date, time, then one field per data
/// column); `booleans` carries one flag per data column, true for Yes/No
/// units. Other columns in the row are unaffected by a cell-level skip.
pub fn parse_row(fields: &[&str], booleans: &[bool]) -> Result<ParsedRow, RowSkip> {
    if fields.len() != booleans.len() + 2 {
        return Err(RowSkip::ShapeMismatch);
    }

    let timestamp = parse_timestamp(fields[0], fields[1]).ok_or(RowSkip::BadTimestamp)?;
    let cells = fields[2..]
        .iter()
        .zip(booleans)
        .map(|(raw, &boolean)| parse_cell(raw, boolean))
        .collect();

    Ok(ParsedRow { timestamp, cells })
}

/// Combine the date and time fields and try each accepted format.
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", date.trim(), time.trim());
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&combined, fmt).ok())
}

/// Coerce one cell.
///
/// Yes/No columns accept only the literal tokens; numeric columns reject
/// non-finite values at the door so statistics never see them.
pub fn parse_cell(raw: &str, boolean: bool) -> CellOutcome {
    let value = raw.trim();
    if value.is_empty() {
        return CellOutcome::Empty;
    }

    if boolean {
        return match value {
            "Yes" => CellOutcome::Value(1.0),
            "No" => CellOutcome::Value(0.0),
            _ => CellOutcome::Skipped(CellSkip::BadBoolean),
        };
    }

    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => CellOutcome::Value(v),
        Ok(_) => CellOutcome::Skipped(CellSkip::NonFinite),
        Err(_) => CellOutcome::Skipped(CellSkip::BadNumber),
    }
}
