pub mod holiday;
pub mod leave;
pub mod note;
pub mod quota;

// Re-export all repositories for easy importing
pub use holiday::HolidayRepository;
pub use leave::LeaveRepository;
pub use note::NoteRepository;
pub use quota::QuotaRepository;
