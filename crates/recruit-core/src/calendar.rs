use anyhow::anyhow;
use chrono::{Datelike, NaiveDate};

use crate::candidate::Interview;
use crate::datetime::{format_clock, iso_date};
use crate::schedule::CalendarSlot;

/// Per-day display cap. A policy of the view, not of the data: buckets keep
/// every event regardless.
pub const MAX_VISIBLE_EVENTS: usize = 3;

/// A month laid out for a 7-column week grid: `leading` empty cells (one per
/// weekday before the 1st, Sunday first) followed by the day numbers. The
/// grid may end mid-row; trailing padding is the renderer's business.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<u32>>,
    days_in_month: u32,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> anyhow::Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| anyhow!("invalid month: {year}-{month}"))?;

        let (next_year, next_month) = next_month(year, month);
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|day_one| day_one.pred_opt())
            .ok_or_else(|| anyhow!("invalid month: {year}-{month}"))?;

        let leading = first.weekday().num_days_from_sunday() as usize;
        let days_in_month = last.day();

        let mut cells = Vec::with_capacity(leading + days_in_month as usize);
        cells.resize(leading, None);
        cells.extend((1..=days_in_month).map(Some));

        Ok(Self {
            year,
            month,
            cells,
            days_in_month,
        })
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// `YYYY-MM-DD` join key for the given day number.
    pub fn iso_date(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(7)
    }
}

/// Pure month navigation; December rolls into January of the next year.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Pure month navigation; January rolls into December of the previous year.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Anything placeable on the calendar. The date key must match the grid's
/// `iso_date` exactly: no timezone normalization, no partial matching.
pub trait DatedEvent {
    fn date_key(&self) -> String;
    fn summary(&self) -> String;
}

impl DatedEvent for CalendarSlot {
    fn date_key(&self) -> String {
        iso_date(self.date)
    }

    fn summary(&self) -> String {
        format!("{} {}", format_clock(self.start), self.display_title())
    }
}

impl DatedEvent for Interview {
    fn date_key(&self) -> String {
        iso_date(self.date)
    }

    fn summary(&self) -> String {
        format!("{} {} interview", format_clock(self.time), self.kind.label())
    }
}

/// Events belonging to the day whose ISO date equals `iso` exactly, in input
/// order.
pub fn bucket_events_by_date<'a, E: DatedEvent>(events: &'a [E], iso: &str) -> Vec<&'a E> {
    events.iter().filter(|event| event.date_key() == iso).collect()
}

/// A day's bucket split for display: at most [`MAX_VISIBLE_EVENTS`] shown,
/// the rest counted. Nothing is dropped from the bucket itself.
#[derive(Debug)]
pub struct DayAgenda<'a, E> {
    events: Vec<&'a E>,
}

impl<'a, E> DayAgenda<'a, E> {
    pub fn new(events: Vec<&'a E>) -> Self {
        Self { events }
    }

    pub fn visible(&self) -> &[&'a E] {
        let shown = self.events.len().min(MAX_VISIBLE_EVENTS);
        &self.events[..shown]
    }

    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(MAX_VISIBLE_EVENTS)
    }

    pub fn all(&self) -> &[&'a E] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DayAgenda, MonthGrid, bucket_events_by_date, next_month, prev_month};
    use crate::datetime::parse_clock;
    use crate::schedule::{CalendarSlot, SlotKind};

    fn slot_on(id: &str, iso: &str) -> CalendarSlot {
        CalendarSlot::new(
            id.to_string(),
            NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("valid date"),
            parse_clock("09:00").expect("valid time"),
            parse_clock("10:00").expect("valid time"),
            SlotKind::Interview,
        )
    }

    #[test]
    fn cell_count_is_day_count_plus_leading_blanks() {
        for (year, month) in [(2024, 1), (2024, 2), (2023, 2), (2024, 12), (2025, 6)] {
            let grid = MonthGrid::new(year, month).expect("valid month");
            let days = grid.days_in_month() as usize;
            assert!(grid.cells.len() >= days);
            assert!(grid.cells.len() <= days + 6);

            let day_cells: Vec<u32> = grid.cells.iter().flatten().copied().collect();
            assert_eq!(day_cells, (1..=grid.days_in_month()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(MonthGrid::new(2024, 2).expect("valid").days_in_month(), 29);
        assert_eq!(MonthGrid::new(2023, 2).expect("valid").days_in_month(), 28);
    }

    #[test]
    fn leading_blanks_match_the_first_weekday() {
        // 2024-01-01 was a Monday, so one blank Sunday cell leads.
        let grid = MonthGrid::new(2024, 1).expect("valid");
        assert_eq!(grid.cells[0], None);
        assert_eq!(grid.cells[1], Some(1));
    }

    #[test]
    fn iso_dates_are_zero_padded() {
        let grid = MonthGrid::new(2024, 1).expect("valid");
        assert_eq!(grid.iso_date(5), "2024-01-05");
        assert_eq!(grid.iso_date(22), "2024-01-22");
    }

    #[test]
    fn navigation_wraps_year_boundaries() {
        assert_eq!(next_month(2023, 12), (2024, 1));
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(next_month(2024, 6), (2024, 7));
        assert_eq!(prev_month(2024, 6), (2024, 5));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(MonthGrid::new(2024, 0).is_err());
        assert!(MonthGrid::new(2024, 13).is_err());
    }

    #[test]
    fn events_bucket_only_under_their_exact_day() {
        let events = vec![
            slot_on("a", "2024-01-22"),
            slot_on("b", "2024-01-23"),
            slot_on("c", "2024-01-22"),
        ];
        let grid = MonthGrid::new(2024, 1).expect("valid");

        for day in 1..=grid.days_in_month() {
            let bucket = bucket_events_by_date(&events, &grid.iso_date(day));
            match day {
                22 => {
                    let ids: Vec<&str> = bucket.iter().map(|slot| slot.id.as_str()).collect();
                    assert_eq!(ids, vec!["a", "c"]);
                }
                23 => assert_eq!(bucket.len(), 1),
                _ => assert!(bucket.is_empty()),
            }
        }
    }

    #[test]
    fn overflow_counts_beyond_the_cap_without_dropping() {
        let events: Vec<CalendarSlot> = (0..5)
            .map(|n| slot_on(&format!("s{n}"), "2024-01-22"))
            .collect();

        let agenda = DayAgenda::new(bucket_events_by_date(&events, "2024-01-22"));
        assert_eq!(agenda.visible().len(), 3);
        assert_eq!(agenda.overflow(), 2);
        assert_eq!(agenda.all().len(), 5);
    }
}
