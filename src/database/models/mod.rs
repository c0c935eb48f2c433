pub mod holiday;
pub mod leave;
pub(crate) mod macros;
pub mod note;
pub mod quota;

// Re-export all models for easy importing
pub use holiday::*;
pub use leave::*;
pub use note::*;
pub use quota::*;

use serde::Serialize;

/// The four record collections as last read from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSnapshot {
    pub leaves: Vec<LeaveRecord>,
    pub holidays: Vec<HolidayRecord>,
    pub quotas: Vec<QuotaRecord>,
    pub notes: Vec<NoteRecord>,
}
