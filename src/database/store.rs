use sqlx::PgPool;

use crate::database::{
    models::{
        HolidayInput, HolidayRecord, LeaveInput, LeaveRecord, NoteInput, NoteRecord, QuotaInput,
        QuotaRecord, RecordSnapshot,
    },
    repositories::{HolidayRepository, LeaveRepository, NoteRepository, QuotaRepository},
};
use crate::error::AppError;

/// Remote store holding the four calendar tables.
///
/// Reads are unconditional full-table reads; writes are single calls with no
/// compensating action on failure.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn fetch_leaves(&self) -> Result<Vec<LeaveRecord>, AppError>;

    async fn fetch_holidays(&self) -> Result<Vec<HolidayRecord>, AppError>;

    async fn fetch_quotas(&self) -> Result<Vec<QuotaRecord>, AppError>;

    async fn fetch_notes(&self) -> Result<Vec<NoteRecord>, AppError>;

    async fn insert_leave(&self, input: LeaveInput) -> Result<LeaveRecord, AppError>;

    async fn insert_holiday(&self, input: HolidayInput) -> Result<HolidayRecord, AppError>;

    /// Insert-or-update keyed by leave type
    async fn upsert_quota(&self, input: QuotaInput) -> Result<QuotaRecord, AppError>;

    async fn insert_note(&self, input: NoteInput) -> Result<NoteRecord, AppError>;

    async fn fetch_snapshot(&self) -> Result<RecordSnapshot, AppError> {
        Ok(RecordSnapshot {
            leaves: self.fetch_leaves().await?,
            holidays: self.fetch_holidays().await?,
            quotas: self.fetch_quotas().await?,
            notes: self.fetch_notes().await?,
        })
    }
}

#[derive(Clone)]
pub struct PgRecordStore {
    leaves: LeaveRepository,
    holidays: HolidayRepository,
    quotas: QuotaRepository,
    notes: NoteRepository,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            leaves: LeaveRepository::new(pool.clone()),
            holidays: HolidayRepository::new(pool.clone()),
            quotas: QuotaRepository::new(pool.clone()),
            notes: NoteRepository::new(pool),
        }
    }
}

impl RecordStore for PgRecordStore {
    async fn fetch_leaves(&self) -> Result<Vec<LeaveRecord>, AppError> {
        Ok(self.leaves.find_all().await?)
    }

    async fn fetch_holidays(&self) -> Result<Vec<HolidayRecord>, AppError> {
        Ok(self.holidays.find_all().await?)
    }

    async fn fetch_quotas(&self) -> Result<Vec<QuotaRecord>, AppError> {
        Ok(self.quotas.find_all().await?)
    }

    async fn fetch_notes(&self) -> Result<Vec<NoteRecord>, AppError> {
        Ok(self.notes.find_all().await?)
    }

    async fn insert_leave(&self, input: LeaveInput) -> Result<LeaveRecord, AppError> {
        Ok(self.leaves.create(input).await?)
    }

    async fn insert_holiday(&self, input: HolidayInput) -> Result<HolidayRecord, AppError> {
        Ok(self.holidays.create(input).await?)
    }

    async fn upsert_quota(&self, input: QuotaInput) -> Result<QuotaRecord, AppError> {
        Ok(self.quotas.upsert(input).await?)
    }

    async fn insert_note(&self, input: NoteInput) -> Result<NoteRecord, AppError> {
        Ok(self.notes.create(input).await?)
    }
}
