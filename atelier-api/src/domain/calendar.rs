//! Month grid projection of project spans.

use std::fmt;

use time::{Date, Month};

use super::{
    dates,
    models::{ProjectRecord, Worker},
};

/// Cells in a rendered month: six Monday-first weeks.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone)]
pub struct CalendarMonth<'a> {
    pub year: i32,
    pub month: Month,
    /// Always `GRID_CELLS` long. `None` pads before the 1st and after the last day.
    pub cells: Vec<Option<CalendarDay<'a>>>,
}

impl CalendarMonth<'_> {
    pub fn previous(&self) -> Option<(i32, Month)> {
        dates::shift_month(self.year, self.month, -1)
    }

    pub fn next(&self) -> Option<(i32, Month)> {
        dates::shift_month(self.year, self.month, 1)
    }
}

#[derive(Debug, Clone)]
pub struct CalendarDay<'a> {
    pub date: Date,
    pub entries: Vec<CalendarEntry<'a>>,
}

impl CalendarDay<'_> {
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// Entries beyond the display cap.
    pub fn hidden(&self, cap: usize) -> usize {
        self.entries.len().saturating_sub(cap)
    }
}

#[derive(Debug, Clone)]
pub struct CalendarEntry<'a> {
    pub record: &'a ProjectRecord,
    pub is_start_day: bool,
    pub color: ProjectColor,
    /// `None` when unassigned or the worker id is unknown.
    pub worker_name: Option<&'a str>,
}

/// Project `records` onto the days of `year`/`month`. Entries keep input order.
pub fn project_month<'a>(
    records: &'a [ProjectRecord],
    workers: &'a [Worker],
    year: i32,
    month: Month,
) -> CalendarMonth<'a> {
    let mut cells: Vec<Option<CalendarDay<'a>>> = Vec::with_capacity(GRID_CELLS);

    if let Some(first) = dates::first_of_month(year, month) {
        let offset = usize::from(first.weekday().number_days_from_monday());
        let days = dates::days_in_month(year, month);

        cells.extend((0..offset).map(|_| None));
        for date in (1..=days).filter_map(|d| Date::from_calendar_date(year, month, d).ok()) {
            cells.push(Some(CalendarDay {
                date,
                entries: entries_on(records, workers, date),
            }));
        }
    }

    cells.resize_with(GRID_CELLS, || None);

    CalendarMonth { year, month, cells }
}

fn entries_on<'a>(
    records: &'a [ProjectRecord],
    workers: &'a [Worker],
    date: Date,
) -> Vec<CalendarEntry<'a>> {
    records
        .iter()
        .filter(|r| r.covers(date))
        .map(|record| CalendarEntry {
            record,
            is_start_day: record.start_date == date,
            color: project_color(&record.project_name),
            worker_name: record.assigned_worker.as_ref().and_then(|id| {
                workers
                    .iter()
                    .find(|w| &w.id == id)
                    .map(|w| w.name.as_str())
            }),
        })
        .collect()
}

/// Warm gold tone derived from a project name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectColor {
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
}

impl fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

pub fn project_color(name: &str) -> ProjectColor {
    let mut buf = [0u16; 2];
    let hash: u32 = name
        .chars()
        .map(|c| u32::from(c.encode_utf16(&mut buf)[0]))
        .sum();

    ProjectColor {
        hue: 25 + hash % 25,
        saturation: 70 + hash % 20,
        lightness: 45 + hash % 15,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::models::{fixtures::record, WorkerId};

    fn day<'m, 'a>(grid: &'m CalendarMonth<'a>, n: u8) -> &'m CalendarDay<'a> {
        grid.cells
            .iter()
            .flatten()
            .find(|d| d.day() == n)
            .unwrap()
    }

    #[test]
    fn grid_has_42_cells_and_one_per_day() {
        for (year, month, days) in [
            (2025, Month::January, 31),
            (2025, Month::February, 28),
            (2024, Month::February, 29),
            (2025, Month::June, 30),
            (2026, Month::March, 31),
        ] {
            let grid = project_month(&[], &[], year, month);
            assert_eq!(grid.cells.len(), GRID_CELLS);
            assert_eq!(grid.cells.iter().flatten().count(), days);
        }
    }

    #[test]
    fn first_day_lands_on_its_weekday_column() {
        // 2025-01-01 is a Wednesday
        let grid = project_month(&[], &[], 2025, Month::January);
        assert!(grid.cells[..2].iter().all(Option::is_none));
        assert_eq!(grid.cells[2].as_ref().map(|d| d.day()), Some(1));

        // 2025-09-01 is a Monday
        let grid = project_month(&[], &[], 2025, Month::September);
        assert_eq!(grid.cells[0].as_ref().map(|d| d.day()), Some(1));
    }

    #[test]
    fn record_spans_start_through_deadline() {
        let mut r = record("p1", date!(2025 - 01 - 05));
        r.deadline = Some(date!(2025 - 01 - 08));
        let records = [r];

        let grid = project_month(&records, &[], 2025, Month::January);

        for n in 1..=31u8 {
            let entries = &day(&grid, n).entries;
            if (5..=8).contains(&n) {
                assert_eq!(entries.len(), 1, "day {}", n);
                assert_eq!(entries[0].is_start_day, n == 5);
            } else {
                assert!(entries.is_empty(), "day {}", n);
            }
        }
    }

    #[test]
    fn entries_keep_input_order_and_resolve_workers() {
        let mut a = record("a", date!(2025 - 03 - 10));
        a.assigned_worker = Some(WorkerId::from("1"));
        let mut b = record("b", date!(2025 - 03 - 09));
        b.deadline = Some(date!(2025 - 03 - 12));
        b.assigned_worker = Some(WorkerId::from("ghost"));
        let records = [a, b];
        let workers = [Worker::new("1", "Jordi")];

        let grid = project_month(&records, &workers, 2025, Month::March);
        let entries = &day(&grid, 10).entries;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].record.id.as_str(), "a");
        assert_eq!(entries[0].worker_name, Some("Jordi"));
        assert_eq!(entries[1].record.id.as_str(), "b");
        assert_eq!(entries[1].worker_name, None);
    }

    #[test]
    fn hidden_counts_entries_over_cap() {
        let records: Vec<_> = (0..6)
            .map(|i| record(&format!("r{}", i), date!(2025 - 05 - 20)))
            .collect();
        let grid = project_month(&records, &[], 2025, Month::May);
        let cell = day(&grid, 20);

        assert_eq!(cell.hidden(4), 2);
        assert_eq!(cell.hidden(10), 0);
    }

    #[test]
    fn navigation_wraps_years() {
        let grid = project_month(&[], &[], 2025, Month::January);
        assert_eq!(grid.previous(), Some((2024, Month::December)));
        assert_eq!(grid.next(), Some((2025, Month::February)));
    }

    #[test]
    fn color_is_deterministic_and_warm() {
        let a = project_color("Memoire Ring");
        assert_eq!(a, project_color("Memoire Ring"));
        assert!((25..50).contains(&a.hue));
        assert!((70..90).contains(&a.saturation));
        assert!((45..60).contains(&a.lightness));

        // "AB" = 65 + 66
        let ab = project_color("AB");
        assert_eq!(ab.to_string(), "hsl(31, 81%, 56%)");
        assert_eq!(project_color("").to_string(), "hsl(25, 70%, 45%)");
    }
}
