pub mod calendar;
pub mod submissions;

pub use calendar::{CalendarService, ViewUpdate};
pub use submissions::{
    HolidaySubmission, LeaveSubmission, NoteSubmission, QuotaSubmission, QuotaTotal,
};
