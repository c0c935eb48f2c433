//! Application state container.
//!
//! Transitions take the state by value and hand back the next state, so a
//! caller can keep the old one around to diff views or to roll back when a
//! store call fails.

use chrono::NaiveDate;

use crate::calendar::{
    day_state::{DayCell, DayContext},
    grid::YearMonth,
    locale,
    quota::{self, QuotaLine},
    view::{MonthView, NoteView, ViewChanges},
};
use crate::database::models::{NoteRecord, RecordSnapshot};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    year_month: YearMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    selected_detail: String,
    snapshot: RecordSnapshot,
}

impl CalendarState {
    /// Start on the month containing `today` with nothing selected
    pub fn new(today: NaiveDate) -> Result<Self, AppError> {
        Ok(Self {
            year_month: YearMonth::containing(today)?,
            today,
            selected: None,
            selected_detail: String::new(),
            snapshot: RecordSnapshot::default(),
        })
    }

    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn selected_detail(&self) -> &str {
        &self.selected_detail
    }

    pub fn snapshot(&self) -> &RecordSnapshot {
        &self.snapshot
    }

    pub fn select_date(mut self, date: NaiveDate) -> Self {
        self.selected = Some(date);
        self.refresh_detail()
    }

    pub fn change_month(mut self, direction: i32) -> Result<Self, AppError> {
        self.year_month = self.year_month.shift(direction)?;
        Ok(self)
    }

    pub fn with_snapshot(mut self, snapshot: RecordSnapshot) -> Self {
        self.snapshot = snapshot;
        self.refresh_detail()
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn cells(&self) -> Vec<DayCell> {
        self.day_context().resolve_grid()
    }

    pub fn summary(&self) -> Vec<QuotaLine> {
        quota::summarize(&self.snapshot.leaves, &self.snapshot.quotas)
    }

    pub fn notes_for(&self, date: NaiveDate) -> Vec<&NoteRecord> {
        self.snapshot
            .notes
            .iter()
            .filter(|note| note.date == date)
            .collect()
    }

    pub fn view(&self) -> MonthView {
        let notes = self
            .selected
            .map(|date| self.notes_for(date).into_iter().map(NoteView::from).collect())
            .unwrap_or_default();

        MonthView {
            year: self.year_month.year(),
            month: self.year_month.month(),
            header: locale::month_header(self.year_month),
            weekdays: locale::weekday_headers(),
            cells: self.cells(),
            summary: self.summary(),
            today: self.today,
            selected: self.selected,
            selected_detail: self.selected_detail.clone(),
            notes,
        }
    }

    pub fn changes_since(&self, previous: &CalendarState) -> ViewChanges {
        ViewChanges::between(&previous.view(), &self.view())
    }

    fn day_context(&self) -> DayContext<'_> {
        DayContext::new(
            self.year_month,
            self.today,
            self.selected,
            &self.snapshot.leaves,
            &self.snapshot.holidays,
        )
    }

    fn refresh_detail(mut self) -> Self {
        let detail = match self.selected {
            Some(date) => self.day_context().detail_for(date),
            None => String::new(),
        };
        self.selected_detail = detail;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day_state::VisualState;
    use crate::database::models::{HolidayRecord, LeaveRecord, QuotaRecord};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn snapshot() -> RecordSnapshot {
        RecordSnapshot {
            leaves: vec![LeaveRecord {
                id: 1,
                date: date(2024, 12, 10),
                leave_type: "sick".to_string(),
                reason: "Dentist".to_string(),
            }],
            holidays: vec![HolidayRecord {
                id: 1,
                date: date(2024, 12, 31),
                name: "New Year's Eve".to_string(),
            }],
            quotas: vec![QuotaRecord {
                id: 1,
                leave_type: "sick".to_string(),
                total: 30,
            }],
            notes: vec![NoteRecord {
                id: 1,
                date: date(2024, 12, 10),
                content: "Bring x-rays".to_string(),
                color: "pink".to_string(),
            }],
        }
    }

    #[test]
    fn test_new_state_opens_on_todays_month() {
        let state = CalendarState::new(date(2024, 12, 5)).unwrap();

        assert_eq!(state.year_month(), YearMonth::new(2024, 12).unwrap());
        assert_eq!(state.selected(), None);
        assert_eq!(state.view().header, "ธันวาคม 2024");
    }

    #[test]
    fn test_change_month_wraps_both_directions() {
        let state = CalendarState::new(date(2024, 12, 5)).unwrap();

        let forward = state.clone().change_month(1).unwrap();
        assert_eq!((forward.view().year, forward.view().month), (2025, 1));

        let back = forward.change_month(-1).unwrap().change_month(-12).unwrap();
        assert_eq!((back.view().year, back.view().month), (2023, 12));
    }

    #[test]
    fn test_select_date_sets_detail_text() {
        let state = CalendarState::new(date(2024, 12, 5))
            .unwrap()
            .with_snapshot(snapshot())
            .select_date(date(2024, 12, 10));

        assert_eq!(state.selected_detail(), "Dentist");
        let view = state.view();
        assert_eq!(view.notes.len(), 1);
        assert_eq!(view.notes[0].swatch, "pink-100");

        let cell = view.cells.iter().find(|c| c.date == date(2024, 12, 10)).unwrap();
        assert_eq!(cell.visual_state, VisualState::Selected);
    }

    #[test]
    fn test_new_snapshot_refreshes_selected_detail() {
        let state = CalendarState::new(date(2024, 12, 5))
            .unwrap()
            .select_date(date(2024, 12, 31));
        assert_eq!(state.selected_detail(), "");

        let state = state.with_snapshot(snapshot());
        assert_eq!(state.selected_detail(), "New Year's Eve");
    }

    #[test]
    fn test_changes_since_reports_only_touched_parts() {
        let before = CalendarState::new(date(2024, 12, 5))
            .unwrap()
            .with_snapshot(snapshot());

        let selected = before.clone().select_date(date(2024, 12, 20));
        let changes = selected.changes_since(&before);
        assert_eq!(
            changes,
            ViewChanges {
                header: false,
                grid: true,
                summary: false,
                selection: true,
                notes: false,
            }
        );

        let moved = before.clone().change_month(1).unwrap();
        let changes = moved.changes_since(&before);
        assert!(changes.header);
        assert!(changes.grid);
        assert!(!changes.summary);

        assert!(!before.changes_since(&before.clone()).any());
    }
}
