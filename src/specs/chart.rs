// src/specs/chart.rs
//! Spec for the weekly chart print page.
//!
//! Both chart variants render the same shape:
//!
//! ```text
//! <title>The Official UK Top 40 Singles Chart - 7th December 2014</title>
//! <table>
//!   <tr><th>Position</th><th>Status</th><th>Previous</th><th>Weeks</th><th>Artist</th><th>Title</th></tr>
//!   <tr><td>1</td><td>up 3</td><td>4</td><td>24</td><td>Ed Sheeran</td><td>Thinking Out Loud</td></tr>
//!   ...
//! </table>
//! ```
//!
//! The chart date exists only in the title text. The first table row is
//! always the header. Older pages carry the year in the title, newer
//! ones drop it; a year-less date phrase resolves against the current
//! year, an explicit year is never overridden.

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use log::warn;

use crate::core::html::Document;
use crate::data::{Change, ChartEntry, ChartSnapshot};
use crate::error::ScrapeError;

/// Assemble a snapshot from a parsed chart page.
///
/// `retrieved` is the epoch timestamp captured when processing began.
/// A page with no table rows at all yields the empty snapshot rather
/// than an error; every other structural problem is a typed failure.
pub fn parse_chart(doc: &Document, retrieved: i64) -> Result<ChartSnapshot, ScrapeError> {
    let title = doc.find_first("title").map(|n| n.text()).unwrap_or_default();
    let date = resolve_chart_date(&title)?;

    let rows = doc.find_all("tr");
    if rows.is_empty() {
        warn!("chart page has no table rows, returning empty snapshot");
        return Ok(ChartSnapshot::empty());
    }

    // First row is the header
    let mut entries = Vec::with_capacity(rows.len() - 1);
    for row in rows.iter().skip(1) {
        let cells: Vec<String> = row.find_all("td").iter().map(|c| c.text()).collect();
        entries.push(unpack_row(&cells)?);
    }

    Ok(ChartSnapshot {
        date: date.and_time(NaiveTime::MIN).and_utc().timestamp(),
        retrieved,
        entries,
    })
}

/// Extract the chart date from the page title.
///
/// `"The Official UK Top 40 Singles Chart - 7th December 2014"` → 2014-12-07.
pub fn resolve_chart_date(title: &str) -> Result<NaiveDate, ScrapeError> {
    if title.is_empty() {
        return Err(ScrapeError::TitleMissing);
    }
    let phrase = match title.splitn(2, '-').nth(1) {
        Some(rest) => strip_ordinal_suffix(rest.trim()),
        None => return Err(ScrapeError::TitleMalformed),
    };

    if let Ok(date) = NaiveDate::parse_from_str(&phrase, "%d %B %Y") {
        return Ok(date);
    }
    // Year-less title convention: assume the current year
    let with_year = format!("{} {}", phrase, Utc::now().year());
    NaiveDate::parse_from_str(&with_year, "%d %B %Y")
        .map_err(|_| ScrapeError::DateUnparsable(phrase))
}

/// Unpack one data row's cell texts against the fixed column schema:
/// position, status, previous position, weeks on chart, artist, title.
///
/// An empty or absent cell falls back to the column type's zero value
/// (new entries have a blank previous-position cell). Non-numeric text
/// in an integer column is a hard error, not a default.
pub fn unpack_row(cells: &[String]) -> Result<ChartEntry, ScrapeError> {
    let position = int_cell(cells, 0, "position")?;
    let status = str_cell(cells, 1);
    let previous_position = int_cell(cells, 2, "previousPosition")?;
    let num_weeks = int_cell(cells, 3, "numWeeks")?;
    let artist = str_cell(cells, 4);
    let title = str_cell(cells, 5);

    let change = Change::between(position, previous_position);
    Ok(ChartEntry {
        position,
        status,
        previous_position,
        num_weeks,
        artist,
        title,
        change,
    })
}

/* ---------------- helpers ---------------- */

/// "30th November" → "30 November". Only strips st/nd/rd/th directly
/// after a digit, so month names keep their letters.
fn strip_ordinal_suffix(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(ch) = rest.chars().next() {
        if out.ends_with(|c: char| c.is_ascii_digit()) {
            if let Some(tail) = ["st", "nd", "rd", "th"]
                .iter()
                .find_map(|suf| rest.strip_prefix(suf))
            {
                rest = tail;
                continue;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

fn str_cell(cells: &[String], idx: usize) -> String {
    s!(cells.get(idx).map(|c| c.trim()).unwrap_or(""))
}

fn int_cell(cells: &[String], idx: usize, field: &'static str) -> Result<u32, ScrapeError> {
    let text = cells.get(idx).map(|c| c.trim()).unwrap_or("");
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| ScrapeError::CellTypeMismatch {
        field,
        value: s!(text),
    })
}
