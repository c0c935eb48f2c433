use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{day_state::DayCell, locale::WeekdayHeader, quota::QuotaLine};
use crate::database::models::NoteRecord;

/// Everything a renderer needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub header: String,
    pub weekdays: Vec<WeekdayHeader>,
    /// 42 cells, week-major, Sunday-first
    pub cells: Vec<DayCell>,
    pub summary: Vec<QuotaLine>,
    pub today: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub selected_detail: String,
    pub notes: Vec<NoteView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub id: i64,
    pub date: NaiveDate,
    pub content: String,
    pub color: String,
    pub swatch: &'static str,
}

impl From<&NoteRecord> for NoteView {
    fn from(note: &NoteRecord) -> Self {
        Self {
            id: note.id,
            date: note.date,
            content: note.content.clone(),
            color: note.color.clone(),
            swatch: note.swatch(),
        }
    }
}

/// Which parts of a [`MonthView`] differ from the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewChanges {
    pub header: bool,
    pub grid: bool,
    pub summary: bool,
    pub selection: bool,
    pub notes: bool,
}

impl ViewChanges {
    pub fn between(previous: &MonthView, next: &MonthView) -> Self {
        Self {
            header: previous.header != next.header,
            grid: previous.cells != next.cells,
            summary: previous.summary != next.summary,
            selection: previous.selected != next.selected
                || previous.selected_detail != next.selected_detail,
            notes: previous.notes != next.notes,
        }
    }

    pub fn any(&self) -> bool {
        self.header || self.grid || self.summary || self.selection || self.notes
    }
}
