//! Month grid generation.
//!
//! A month is always shown as six full Sunday-first weeks, so the grid has a
//! fixed 42 cells including lead-in and lead-out days from the adjacent
//! months.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::AppError;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_DAYS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// A validated (year, month) pair whose whole grid is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    first: NaiveDate,
    grid_start: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "Invalid month {}, expected 1-12",
                month
            )));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::validation(format!("Year {} is out of range", year)))?;
        let lead_in = u64::from(first.weekday().num_days_from_sunday());
        let grid_start = first
            .checked_sub_days(Days::new(lead_in))
            .filter(|start| start.checked_add_days(Days::new(GRID_DAYS as u64 - 1)).is_some())
            .ok_or_else(|| AppError::validation(format!("Year {} is out of range", year)))?;

        Ok(Self { first, grid_start })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Result<Self, AppError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Move by `months` (negative goes back), rolling the year over at
    /// December/January.
    pub fn shift(&self, months: i32) -> Result<Self, AppError> {
        let index = i64::from(self.year()) * 12 + i64::from(self.month() - 1) + i64::from(months);
        let year = i32::try_from(index.div_euclid(12))
            .map_err(|_| AppError::validation("Month navigation left the supported range"))?;
        let month = index.rem_euclid(12) as u32 + 1;

        Self::new(year, month)
    }
}

/// The 42 dates shown for a month, week-major and Sunday-first.
pub fn month_grid(year_month: YearMonth) -> [NaiveDate; GRID_DAYS] {
    std::array::from_fn(|offset| year_month.grid_start + Days::new(offset as u64))
}
