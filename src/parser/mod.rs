pub mod day;
pub mod series;
pub mod units;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// One calendar day's activity, exactly as encoded by the source.
///
/// `level` is GitHub's own 0-4 intensity bucket. It is carried through
/// as given, never re-derived from `contributions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub contributions: u32,
    pub level: u8,
}

/// Seven slots, one per day. `None` pads dates past the end of the
/// data and only ever appears as a suffix of the final week.
pub type Week = [Option<Day>; 7];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributions {
    pub total_contributions: u32,
    /// Date of the latest day with a positive count. Defaults to today
    /// (local clock) when no day qualifies.
    pub last_contribution: NaiveDate,
    /// All parsed days, sorted ascending by date.
    pub days: Vec<Day>,
    pub weeks: Vec<Week>,
    /// Transposed view of `weeks`: row `i` holds slot `i` of every
    /// week. Empty when there are no weeks.
    pub calendar: Vec<Vec<Option<Day>>>,
}

/// Three-pass pipeline: html → day fragments → days → shaped series.
pub fn parse_calendar(html: &str) -> Contributions {
    let markup = units::Markup::detect(html);
    let fragments = units::extract_fragments(html, markup);
    let days: Vec<Day> = fragments
        .iter()
        .filter_map(|f| day::normalize(f, markup))
        .collect();
    debug!(
        "Parsed {} days from {} fragments ({:?} markup)",
        days.len(),
        fragments.len(),
        markup
    );
    series::assemble(days)
}

// ── Tests ──
