use chrono::{Datelike, Local, NaiveDate};

/// The month currently shown in the grid. `month0` is zero-based
/// (0 = January), mutated only through `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub year: i32,
    pub month0: u32,
}

impl CalendarView {
    /// Starts on the month containing the local current date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month0: today.month0(),
        }
    }

    /// Moves the view by whole months, rolling year boundaries in both
    /// directions without limit.
    pub fn step(&mut self, delta: i32) {
        let total = i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(delta);
        self.year = total.div_euclid(12) as i32;
        self.month0 = total.rem_euclid(12) as u32;
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month0)
    }

    /// Weekday of day 1, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday_offset(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Grid slots for a 7-column layout: leading `None` placeholders up
    /// to the first weekday, then the day numbers in order.
    pub fn grid_cells(&self) -> Vec<Option<u32>> {
        let offset = self.first_weekday_offset();
        let days = self.days_in_month();
        let mut cells = Vec::with_capacity((offset + days) as usize);
        cells.resize(offset as usize, None);
        cells.extend((1..=days).map(Some));
        cells
    }

    /// Header label, e.g. "December 2025".
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.month_prefix())
    }

    /// Grouping key prefix shared by every date in this month.
    pub fn month_prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month0 + 1)
    }

    pub fn date_string(&self, day: u32) -> String {
        format!("{}-{:02}", self.month_prefix(), day)
    }
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_counts_follow_the_calendar() {
        assert_eq!(days_in_month(2025, 0), 31);
        assert_eq!(days_in_month(2025, 3), 30);
        assert_eq!(days_in_month(2025, 11), 31);
        // February: leap rule including the century exceptions.
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
    }

    #[test]
    fn first_weekday_offset_matches_known_months() {
        // December 2025 starts on a Monday, June 2025 on a Sunday.
        let december = CalendarView { year: 2025, month0: 11 };
        assert_eq!(december.first_weekday_offset(), 1);
        let june = CalendarView { year: 2025, month0: 5 };
        assert_eq!(june.first_weekday_offset(), 0);
    }

    #[test]
    fn step_rolls_year_boundaries() {
        let mut view = CalendarView { year: 2025, month0: 11 };
        view.step(1);
        assert_eq!(view, CalendarView { year: 2026, month0: 0 });
        view.step(-1);
        assert_eq!(view, CalendarView { year: 2025, month0: 11 });

        let mut january = CalendarView { year: 2025, month0: 0 };
        january.step(-1);
        assert_eq!(january, CalendarView { year: 2024, month0: 11 });
    }

    #[test]
    fn step_round_trips_within_a_year() {
        let original = CalendarView { year: 2025, month0: 5 };
        let mut view = original;
        view.step(1);
        view.step(-1);
        assert_eq!(view, original);
    }

    #[test]
    fn grid_cells_have_leading_blanks_then_days() {
        let view = CalendarView { year: 2025, month0: 11 };
        let cells = view.grid_cells();
        assert_eq!(cells.len(), 32);
        assert_eq!(cells[0], None);
        assert_eq!(cells[1], Some(1));
        assert_eq!(cells[31], Some(31));
    }

    #[test]
    fn grid_cells_without_offset_start_on_day_one() {
        let view = CalendarView { year: 2025, month0: 5 };
        let cells = view.grid_cells();
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0], Some(1));
    }

    #[test]
    fn labels_and_keys() {
        let view = CalendarView { year: 2025, month0: 11 };
        assert_eq!(view.label(), "December 2025");
        assert_eq!(view.month_prefix(), "2025-12");
        assert_eq!(view.date_string(7), "2025-12-07");
    }
}
