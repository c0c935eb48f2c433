#![allow(dead_code)]

use std::env;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use leave_calendar::CalendarService;
use leave_calendar::database::{RecordStore, init_database};
use leave_calendar::database::models::*;
use leave_calendar::error::AppError;

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

// Postgres-backed database for repository tests
pub struct TestDb {
    pub pool: PgPool,
}

impl TestDb {
    /// Connects to `DATABASE_URL`, runs migrations and empties every table.
    pub async fn new() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let pool = init_database(&database_url, 2).await?;

        sqlx::query("TRUNCATE leaves, holidays, leave_quota, notes RESTART IDENTITY")
            .execute(&pool)
            .await?;

        Ok(TestDb { pool })
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn fixed_today() -> NaiveDate {
    date(2024, 5, 15)
}

/// Grid index of a May 2024 date; the grid starts on Sunday 28 April.
pub fn may_index(day: u32) -> usize {
    day as usize + 2
}

pub fn leave(id: i64, date: NaiveDate, leave_type: &str, reason: &str) -> LeaveRecord {
    LeaveRecord {
        id,
        date,
        leave_type: leave_type.to_string(),
        reason: reason.to_string(),
    }
}

pub fn holiday(id: i64, date: NaiveDate, name: &str) -> HolidayRecord {
    HolidayRecord {
        id,
        date,
        name: name.to_string(),
    }
}

pub fn quota(id: i64, leave_type: &str, total: i32) -> QuotaRecord {
    QuotaRecord {
        id,
        leave_type: leave_type.to_string(),
        total,
    }
}

pub fn note(id: i64, date: NaiveDate, content: &str, color: &str) -> NoteRecord {
    NoteRecord {
        id,
        date,
        content: content.to_string(),
        color: color.to_string(),
    }
}

/// May 2024 data: two sick days, a vacation day, a leave with an unknown
/// tag, and a personal leave sharing its date with a holiday.
pub fn seeded_snapshot() -> RecordSnapshot {
    RecordSnapshot {
        leaves: vec![
            leave(1, date(2024, 5, 2), "sick", "Flu"),
            leave(2, date(2024, 5, 3), "sick", "Flu"),
            leave(3, date(2024, 5, 20), "vacation", "Trip to Chiang Mai"),
            leave(4, date(2024, 5, 6), "sabbatical", "Study"),
            leave(5, date(2024, 5, 22), "personal", "Errand"),
        ],
        holidays: vec![holiday(1, date(2024, 5, 22), "Visakha Bucha")],
        quotas: vec![quota(1, "sick", 30), quota(2, "vacation", 10)],
        notes: vec![
            note(1, date(2024, 5, 20), "Pack bags", "blue"),
            note(2, date(2024, 5, 20), "Book hotel", "purple"),
            note(3, date(2024, 5, 21), "Unpack", "green"),
        ],
    }
}

#[derive(Default)]
struct MemoryState {
    snapshot: RecordSnapshot,
    next_id: i64,
    failing: bool,
    writes: usize,
}

/// In-memory store. Clones share the same tables, so a test can keep a handle
/// after moving one into a service.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn with_snapshot(snapshot: RecordSnapshot) -> Self {
        let next_id = 1000;
        Self {
            inner: Arc::new(Mutex::new(MemoryState {
                snapshot,
                next_id,
                ..Default::default()
            })),
        }
    }

    /// Every call fails with a storage error while set
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn writes(&self) -> usize {
        self.inner.lock().unwrap().writes
    }

    pub fn snapshot(&self) -> RecordSnapshot {
        self.inner.lock().unwrap().snapshot.clone()
    }

    fn read<T>(&self, f: impl FnOnce(&RecordSnapshot) -> T) -> Result<T, AppError> {
        let state = self.inner.lock().unwrap();
        if state.failing {
            return Err(AppError::StorageError(sqlx::Error::PoolClosed));
        }
        Ok(f(&state.snapshot))
    }

    fn write<T>(&self, f: impl FnOnce(&mut RecordSnapshot, i64) -> T) -> Result<T, AppError> {
        let mut state = self.inner.lock().unwrap();
        if state.failing {
            return Err(AppError::StorageError(sqlx::Error::PoolClosed));
        }
        state.next_id += 1;
        state.writes += 1;
        let id = state.next_id;
        Ok(f(&mut state.snapshot, id))
    }
}

impl RecordStore for MemoryStore {
    async fn fetch_leaves(&self) -> Result<Vec<LeaveRecord>, AppError> {
        self.read(|s| s.leaves.clone())
    }

    async fn fetch_holidays(&self) -> Result<Vec<HolidayRecord>, AppError> {
        self.read(|s| s.holidays.clone())
    }

    async fn fetch_quotas(&self) -> Result<Vec<QuotaRecord>, AppError> {
        self.read(|s| s.quotas.clone())
    }

    async fn fetch_notes(&self) -> Result<Vec<NoteRecord>, AppError> {
        self.read(|s| s.notes.clone())
    }

    async fn insert_leave(&self, input: LeaveInput) -> Result<LeaveRecord, AppError> {
        self.write(|s, id| {
            let record = leave(id, input.date, input.leave_type.as_str(), &input.reason);
            s.leaves.push(record.clone());
            record
        })
    }

    async fn insert_holiday(&self, input: HolidayInput) -> Result<HolidayRecord, AppError> {
        self.write(|s, id| {
            let record = holiday(id, input.date, &input.name);
            s.holidays.push(record.clone());
            record
        })
    }

    async fn upsert_quota(&self, input: QuotaInput) -> Result<QuotaRecord, AppError> {
        self.write(|s, id| {
            match s
                .quotas
                .iter_mut()
                .find(|q| q.leave_type == input.leave_type.as_str())
            {
                Some(existing) => {
                    existing.total = input.total;
                    existing.clone()
                }
                None => {
                    let record = quota(id, input.leave_type.as_str(), input.total);
                    s.quotas.push(record.clone());
                    record
                }
            }
        })
    }

    async fn insert_note(&self, input: NoteInput) -> Result<NoteRecord, AppError> {
        self.write(|s, id| {
            let record = note(id, input.date, &input.content, input.color.as_str());
            s.notes.push(record.clone());
            record
        })
    }
}

pub fn test_service(store: MemoryStore) -> CalendarService<MemoryStore> {
    CalendarService::with_clock(store, fixed_today).unwrap()
}

/// Service over the seeded store, already loaded
pub async fn loaded_service() -> (CalendarService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::with_snapshot(seeded_snapshot());
    let service = test_service(store.clone());
    service.load().await.unwrap();
    (service, store)
}
