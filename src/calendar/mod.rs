//! Calendar and leave-state engine.
//!
//! Everything in here is pure: it reads record snapshots and produces grid
//! cells, quota lines and views without touching the store.

pub mod day_state;
pub mod grid;
pub mod locale;
pub mod quota;
pub mod state;
pub mod view;

pub use day_state::{DayCell, DayContext, VisualState};
pub use grid::{GRID_DAYS, YearMonth, month_grid};
pub use quota::{QuotaLine, summarize};
pub use state::CalendarState;
pub use view::{MonthView, NoteView, ViewChanges};
