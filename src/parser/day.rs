//! Day normalization: turn one fragment into a complete `Day`, or
//! nothing. A fragment missing a required field is dropped, never
//! defaulted, and the rest of the calendar still parses.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use super::units::{Fragment, Markup};
use super::Day;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"data-date="([^"]+)""#).unwrap());
static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"data-level="([^"]+)""#).unwrap());
static SR_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<span class="sr-only">([^<]+)</span>"#).unwrap());

pub fn normalize(fragment: &Fragment, markup: Markup) -> Option<Day> {
    let date_caps = DATE_RE.captures(&fragment.cell)?;
    let date = NaiveDate::parse_from_str(&date_caps[1], "%Y-%m-%d").ok()?;

    let level: u8 = LEVEL_RE
        .captures(&fragment.cell)
        .and_then(|c| c[1].parse().ok())?;

    // Zero-level cells carry no count text at all; don't go looking.
    let contributions = if level == 0 {
        0
    } else {
        match count_text(fragment, markup).as_deref().and_then(leading_count) {
            Some(n) => n,
            None => {
                debug!("Dropping {}: level {} but no readable count", date, level);
                return None;
            }
        }
    };

    Some(Day {
        date,
        contributions,
        level,
    })
}

/// The human-readable count text for this fragment: the sr-only span
/// inside the cell in inline markup, the paired tooltip's inner text
/// otherwise.
fn count_text(fragment: &Fragment, markup: Markup) -> Option<String> {
    match markup {
        Markup::Inline => SR_COUNT_RE
            .captures(&fragment.cell)
            .map(|c| c[1].to_string()),
        Markup::Tooltip => fragment
            .tip
            .as_deref()
            .and_then(inner_text)
            .map(str::to_string),
    }
}

/// Text between the end of the opening tag and the start of the
/// closing tag.
fn inner_text(unit: &str) -> Option<&str> {
    let open_end = unit.find('>')?;
    let close_start = unit.rfind('<')?;
    if close_start <= open_end {
        return None;
    }
    Some(unit[open_end + 1..close_start].trim())
}

/// The leading whitespace-delimited token as an integer. "5
/// contributions on April 3rd" yields 5; "No contributions" yields
/// nothing.
fn leading_count(text: &str) -> Option<u32> {
    text.split_whitespace().next()?.parse().ok()
}
