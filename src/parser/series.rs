//! Series assembly: sort the parsed days, derive the summary values,
//! chunk into week rows, and transpose into the calendar matrix.

use chrono::Local;

use super::{Contributions, Day, Week};

pub fn assemble(mut days: Vec<Day>) -> Contributions {
    // Stable: a duplicate date (one fragment per date, so it should
    // not occur) keeps its source order.
    days.sort_by_key(|d| d.date);

    let total_contributions = days
        .iter()
        .filter(|d| d.contributions > 0)
        .map(|d| d.contributions)
        .sum();

    // Latest day with a positive count; today when none qualifies.
    let last_contribution = days
        .iter()
        .rev()
        .find(|d| d.contributions > 0)
        .map(|d| d.date)
        .unwrap_or_else(|| Local::now().date_naive());

    let weeks = chunk_weeks(&days);
    let calendar = transpose(&weeks);

    Contributions {
        total_contributions,
        last_contribution,
        days,
        weeks,
        calendar,
    }
}

/// Consecutive 7-day rows in chronological order; the final short row
/// is right-padded with `None`.
fn chunk_weeks(days: &[Day]) -> Vec<Week> {
    days.chunks(7)
        .map(|chunk| {
            let mut week: Week = [None; 7];
            for (slot, day) in week.iter_mut().zip(chunk) {
                *slot = Some(*day);
            }
            week
        })
        .collect()
}

/// Day-of-week-major view: row `i` collects slot `i` of every week.
/// Zero weeks yields an empty calendar, not seven empty rows.
fn transpose(weeks: &[Week]) -> Vec<Vec<Option<Day>>> {
    if weeks.is_empty() {
        return Vec::new();
    }
    (0..7)
        .map(|i| weeks.iter().map(|w| w[i]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(date: &str, contributions: u32, level: u8) -> Day {
        Day {
            date: date.parse().unwrap(),
            contributions,
            level,
        }
    }

    fn days(n: u32) -> Vec<Day> {
        (1..=n)
            .map(|i| {
                day(
                    &format!("2023-01-{:02}", i),
                    if i % 2 == 0 { i } else { 0 },
                    if i % 2 == 0 { 1 } else { 0 },
                )
            })
            .collect()
    }

    #[test]
    fn sorts_ascending_by_date() {
        let input = vec![
            day("2023-01-08", 2, 1),
            day("2023-01-01", 0, 0),
            day("2023-01-05", 7, 2),
        ];
        let data = assemble(input);
        let dates: Vec<NaiveDate> = data.days.iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn total_counts_only_positive_days() {
        let data = assemble(days(10));
        // even days 2,4,6,8,10 contribute
        assert_eq!(data.total_contributions, 30);
    }

    #[test]
    fn last_contribution_is_latest_positive_day() {
        let data = assemble(days(9));
        // day 9 has zero contributions, day 8 is the latest positive
        assert_eq!(
            data.last_contribution,
            "2023-01-08".parse::<NaiveDate>().unwrap()
        );
    }

    #[test]
    fn last_contribution_defaults_to_today() {
        let only_zero = vec![day("2023-01-01", 0, 0)];
        let data = assemble(only_zero);
        assert_eq!(data.last_contribution, Local::now().date_naive());

        let empty = assemble(Vec::new());
        assert_eq!(empty.last_contribution, Local::now().date_naive());
    }

    #[test]
    fn week_count_is_ceil_of_sevenths() {
        for (n, expected) in [(0usize, 0usize), (1, 1), (7, 1), (8, 2), (10, 2), (14, 2), (15, 3)] {
            let data = assemble(days(n as u32));
            assert_eq!(data.weeks.len(), expected, "n = {}", n);
        }
    }

    #[test]
    fn only_last_week_padded_and_only_as_suffix() {
        let data = assemble(days(10));
        assert!(data.weeks[0].iter().all(|s| s.is_some()));
        let last = &data.weeks[1];
        let filled = last.iter().take_while(|s| s.is_some()).count();
        assert_eq!(filled, 3);
        assert!(last[filled..].iter().all(|s| s.is_none()));
    }

    #[test]
    fn transposition_law() {
        let data = assemble(days(17));
        assert_eq!(data.calendar.len(), 7);
        for i in 0..7 {
            for j in 0..data.weeks.len() {
                assert_eq!(data.calendar[i][j], data.weeks[j][i]);
            }
        }
    }

    #[test]
    fn empty_series_has_empty_shapes() {
        let data = assemble(Vec::new());
        assert!(data.days.is_empty());
        assert!(data.weeks.is_empty());
        assert!(data.calendar.is_empty());
        assert_eq!(data.total_contributions, 0);
    }

    #[test]
    fn level_passed_through_untouched() {
        // level is never re-derived from the count, even when they disagree
        let data = assemble(vec![day("2023-01-01", 40, 1)]);
        assert_eq!(data.days[0].level, 1);
        assert_eq!(data.total_contributions, 40);
    }
}
