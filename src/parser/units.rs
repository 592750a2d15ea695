//! Fragment extraction: walk the raw calendar HTML and keep only the
//! units that encode a day. Everything else (labels, legend, table
//! scaffolding) is skipped without being understood.

const CELL_OPEN: &str = "<td";
const CELL_CLOSE: &str = "</td>";
const CELL_CLASS: &str = "ContributionCalendar-day";
const TIP_OPEN: &str = "<tool-tip";
const TIP_CLOSE: &str = "</tool-tip>";

/// Which of the two known markup shapes the input uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// The count lives in an sr-only span inside the day cell itself.
    Inline,
    /// The count lives in a separate tool-tip unit after each cell.
    Tooltip,
}

impl Markup {
    /// A given input uses exactly one shape, so the presence of any
    /// tooltip marker is enough to tell them apart.
    pub fn detect(html: &str) -> Markup {
        if html.contains(TIP_OPEN) {
            Markup::Tooltip
        } else {
            Markup::Inline
        }
    }
}

/// The minimal substrings that together encode one calendar day:
/// the day-cell unit plus, in tooltip markup, its paired tooltip.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub cell: String,
    pub tip: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Unit {
    Cell(String),
    Tip(String),
}

/// Scan the input for day-cell and tooltip units, in source order.
///
/// A `<td` counts as a day cell only when its opening tag carries the
/// calendar-day class; label cells and layout cells fall through.
pub fn scan_units(html: &str) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut rest = html;

    while let Some(pos) = rest.find('<') {
        rest = &rest[pos..];

        if starts_tag(rest, TIP_OPEN) {
            if let Some(end) = rest.find(TIP_CLOSE) {
                units.push(Unit::Tip(rest[..end + TIP_CLOSE.len()].to_string()));
                rest = &rest[end + TIP_CLOSE.len()..];
                continue;
            }
        } else if starts_tag(rest, CELL_OPEN) {
            if let Some(open_end) = rest.find('>') {
                if rest[..open_end].contains(CELL_CLASS) {
                    if let Some(end) = rest.find(CELL_CLOSE) {
                        units.push(Unit::Cell(rest[..end + CELL_CLOSE.len()].to_string()));
                        rest = &rest[end + CELL_CLOSE.len()..];
                        continue;
                    }
                }
            }
        }

        rest = &rest[1..];
    }

    units
}

/// True when `s` opens with `tag` as a whole tag name, not a prefix of
/// a longer one (`<td` must not match `<tdata`).
fn starts_tag(s: &str, tag: &str) -> bool {
    s.starts_with(tag)
        && s[tag.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_whitespace() || c == '>' || c == '/')
}

/// Select the per-day fragments for the given markup shape.
pub fn extract_fragments(html: &str, markup: Markup) -> Vec<Fragment> {
    let units = scan_units(html);
    match markup {
        Markup::Inline => units
            .into_iter()
            .filter_map(|u| match u {
                Unit::Cell(cell) => Some(Fragment { cell, tip: None }),
                Unit::Tip(_) => None,
            })
            .collect(),
        Markup::Tooltip => pair_units(units),
    }
}

/// Consume the filtered units two at a time: a cell, then the tooltip
/// adjacent to it. A cell followed by another cell keeps `tip = None`
/// rather than stealing a later tooltip; a tooltip with no preceding
/// cell has nothing to attach to and is skipped.
fn pair_units(units: Vec<Unit>) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut i = 0;

    while i < units.len() {
        let Unit::Cell(cell) = &units[i] else {
            i += 1;
            continue;
        };
        match units.get(i + 1) {
            Some(Unit::Tip(tip)) => {
                fragments.push(Fragment {
                    cell: cell.clone(),
                    tip: Some(tip.clone()),
                });
                i += 2;
            }
            _ => {
                fragments.push(Fragment {
                    cell: cell.clone(),
                    tip: None,
                });
                i += 1;
            }
        }
    }

    fragments
}
