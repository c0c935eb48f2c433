//! Day state resolution.
//!
//! Each in-month grid cell gets exactly one visual state. Precedence, highest
//! first: selected, today, holiday, leave type, none. Holiday outranks leave
//! on a shared date, and when several leaves (or holidays) share a date the
//! last one in collection order is used.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{
    grid::{YearMonth, month_grid},
    locale,
};
use crate::database::models::{HolidayRecord, LeaveRecord, LeaveType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    None,
    Sick,
    Vacation,
    Personal,
    /// A leave whose stored type is not a known leave type
    OtherLeave,
    Holiday,
    Today,
    Selected,
}

impl VisualState {
    pub fn for_leave_tag(tag: &str) -> Self {
        match tag.parse::<LeaveType>() {
            Ok(leave_type) => leave_type.into(),
            Err(_) => VisualState::OtherLeave,
        }
    }
}

impl From<LeaveType> for VisualState {
    fn from(leave_type: LeaveType) -> Self {
        match leave_type {
            LeaveType::Sick => VisualState::Sick,
            LeaveType::Vacation => VisualState::Vacation,
            LeaveType::Personal => VisualState::Personal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub visual_state: VisualState,
    pub tooltip_text: String,
    pub detail_text: String,
}

impl DayCell {
    fn outside_month(date: NaiveDate) -> Self {
        Self {
            date,
            day: date.day(),
            in_current_month: false,
            is_today: false,
            is_selected: false,
            visual_state: VisualState::None,
            tooltip_text: String::new(),
            detail_text: String::new(),
        }
    }
}

/// Inputs shared by every cell of one month.
pub struct DayContext<'a> {
    year_month: YearMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    leaves: HashMap<NaiveDate, &'a LeaveRecord>,
    holidays: HashMap<NaiveDate, &'a HolidayRecord>,
}

impl<'a> DayContext<'a> {
    pub fn new(
        year_month: YearMonth,
        today: NaiveDate,
        selected: Option<NaiveDate>,
        leaves: &'a [LeaveRecord],
        holidays: &'a [HolidayRecord],
    ) -> Self {
        // Later records overwrite earlier ones on the same date
        let leaves = leaves.iter().map(|leave| (leave.date, leave)).collect();
        let holidays = holidays.iter().map(|holiday| (holiday.date, holiday)).collect();

        Self {
            year_month,
            today,
            selected,
            leaves,
            holidays,
        }
    }

    pub fn resolve(&self, date: NaiveDate) -> DayCell {
        if !self.year_month.contains(date) {
            return DayCell::outside_month(date);
        }

        let (mut visual_state, tooltip_text) = match self.annotation(date) {
            Some(Annotation::Holiday(holiday)) => {
                (VisualState::Holiday, locale::holiday_tooltip(&holiday.name))
            }
            Some(Annotation::Leave(leave)) => (
                VisualState::for_leave_tag(&leave.leave_type),
                format!("{}: {}", locale::leave_label(&leave.leave_type), leave.reason),
            ),
            None => (VisualState::None, String::new()),
        };

        let is_today = date == self.today;
        let is_selected = self.selected == Some(date);
        if is_today {
            visual_state = VisualState::Today;
        }
        if is_selected {
            visual_state = VisualState::Selected;
        }

        DayCell {
            date,
            day: date.day(),
            in_current_month: true,
            is_today,
            is_selected,
            visual_state,
            tooltip_text,
            detail_text: self.detail_for(date),
        }
    }

    /// Holiday name or leave reason recorded for `date`, in or out of the
    /// displayed month.
    pub fn detail_for(&self, date: NaiveDate) -> String {
        match self.annotation(date) {
            Some(Annotation::Holiday(holiday)) => holiday.name.clone(),
            Some(Annotation::Leave(leave)) => leave.reason.clone(),
            None => String::new(),
        }
    }

    pub fn resolve_grid(&self) -> Vec<DayCell> {
        month_grid(self.year_month)
            .into_iter()
            .map(|date| self.resolve(date))
            .collect()
    }

    fn annotation(&self, date: NaiveDate) -> Option<Annotation<'a>> {
        if let Some(&holiday) = self.holidays.get(&date) {
            return Some(Annotation::Holiday(holiday));
        }
        self.leaves.get(&date).map(|&leave| Annotation::Leave(leave))
    }
}

enum Annotation<'a> {
    Holiday(&'a HolidayRecord),
    Leave(&'a LeaveRecord),
}
