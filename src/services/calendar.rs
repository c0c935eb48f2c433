use chrono::{Local, NaiveDate};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::calendar::{CalendarState, MonthView, NoteView, ViewChanges};
use crate::database::{
    RecordStore,
    models::{HolidayInput, LeaveInput, LeaveType, NoteColor, NoteInput, QuotaInput, QuotaRecord},
};
use crate::error::AppError;
use crate::services::submissions::{
    self, HolidaySubmission, LeaveSubmission, NoteSubmission, QuotaSubmission,
};

/// Result of a user action: the view to render and what changed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewUpdate {
    pub view: MonthView,
    pub changes: ViewChanges,
}

/// Serializes user actions against the store and keeps the calendar state.
///
/// Every action holds the state lock for its whole store round trip. The
/// state is only replaced once every store call of the action succeeded.
pub struct CalendarService<S> {
    store: S,
    state: Mutex<CalendarState>,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<S: RecordStore> CalendarService<S> {
    pub fn new(store: S) -> Result<Self, AppError> {
        Self::with_clock(store, local_today)
    }

    pub fn with_clock(store: S, clock: fn() -> NaiveDate) -> Result<Self, AppError> {
        Ok(Self {
            store,
            state: Mutex::new(CalendarState::new(clock())?),
            clock,
        })
    }

    /// Initial fetch of all four tables
    pub async fn load(&self) -> Result<ViewUpdate, AppError> {
        let mut state = self.state.lock().await;
        let update = self.refresh(&mut state).await?;

        let snapshot = state.snapshot();
        log::info!(
            "Calendar loaded: {} leaves, {} holidays, {} quotas, {} notes",
            snapshot.leaves.len(),
            snapshot.holidays.len(),
            snapshot.quotas.len(),
            snapshot.notes.len()
        );
        Ok(update)
    }

    pub async fn reload(&self) -> Result<ViewUpdate, AppError> {
        let mut state = self.state.lock().await;
        self.refresh(&mut state).await
    }

    /// Current view, with today re-read from the clock
    pub async fn view(&self) -> MonthView {
        let mut state = self.state.lock().await;
        let next = state.clone().with_today((self.clock)());
        *state = next;
        state.view()
    }

    pub async fn state(&self) -> CalendarState {
        self.state.lock().await.clone()
    }

    pub async fn select_date(&self, date: &str) -> Result<ViewUpdate, AppError> {
        let date = submissions::parse_date(date)?;
        let mut state = self.state.lock().await;
        let next = state.clone().with_today((self.clock)()).select_date(date);
        Ok(Self::commit(&mut state, next))
    }

    pub async fn change_month(&self, direction: i32) -> Result<ViewUpdate, AppError> {
        let mut state = self.state.lock().await;
        let next = state
            .clone()
            .with_today((self.clock)())
            .change_month(direction)?;
        log::debug!("Displayed month changed by {}", direction);
        Ok(Self::commit(&mut state, next))
    }

    pub async fn add_leave(&self, submission: LeaveSubmission) -> Result<ViewUpdate, AppError> {
        let mut state = self.state.lock().await;

        let date = submissions::date_or(submission.date.as_deref(), state.selected())?;
        let leave_type: LeaveType = submissions::required(submission.leave_type, "type")?
            .parse()
            .map_err(AppError::ValidationError)?;
        let input = LeaveInput {
            date,
            leave_type,
            reason: submission.reason.unwrap_or_default().trim().to_string(),
        };

        let record = self.store.insert_leave(input).await?;
        log::info!("Recorded {} leave on {}", record.leave_type, record.date);

        self.refresh(&mut state).await
    }

    pub async fn add_holiday(&self, submission: HolidaySubmission) -> Result<ViewUpdate, AppError> {
        let mut state = self.state.lock().await;

        let date = submissions::date_or(submission.date.as_deref(), state.selected())?;
        let name = submissions::required(submission.name, "name")?;

        let record = self.store.insert_holiday(HolidayInput { date, name }).await?;
        log::info!("Recorded holiday '{}' on {}", record.name, record.date);

        self.refresh(&mut state).await
    }

    pub async fn quotas(&self) -> Vec<QuotaRecord> {
        self.state.lock().await.snapshot().quotas.clone()
    }

    /// Upserts every entry by type. All entries are validated before the first
    /// store call.
    pub async fn update_quotas(
        &self,
        entries: Vec<QuotaSubmission>,
    ) -> Result<ViewUpdate, AppError> {
        let inputs = entries
            .iter()
            .map(|entry| -> Result<QuotaInput, AppError> {
                Ok(QuotaInput {
                    leave_type: entry.leave_type.parse().map_err(AppError::ValidationError)?,
                    total: entry.total.days()?,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let mut state = self.state.lock().await;
        for input in inputs {
            let record = self.store.upsert_quota(input).await?;
            log::info!("Quota for {} set to {}", record.leave_type, record.total);
        }

        self.refresh(&mut state).await
    }

    /// Notes for the given date, or for the selected date when none is given.
    pub async fn notes_for(&self, date: Option<&str>) -> Result<Vec<NoteView>, AppError> {
        let state = self.state.lock().await;
        let date = submissions::date_or(date, state.selected())?;
        Ok(state.notes_for(date).into_iter().map(NoteView::from).collect())
    }

    pub async fn add_note(&self, submission: NoteSubmission) -> Result<ViewUpdate, AppError> {
        let mut state = self.state.lock().await;

        let date = submissions::date_or(submission.date.as_deref(), state.selected())?;
        let content = submissions::required(submission.content, "content")?;
        let color: NoteColor = submissions::required(submission.color, "color")?
            .parse()
            .map_err(AppError::ValidationError)?;

        let record = self
            .store
            .insert_note(NoteInput {
                date,
                content,
                color,
            })
            .await?;
        log::info!("Added {} note on {}", record.color, record.date);

        self.refresh(&mut state).await
    }

    async fn refresh(&self, state: &mut CalendarState) -> Result<ViewUpdate, AppError> {
        let snapshot = self.store.fetch_snapshot().await?;
        let next = state
            .clone()
            .with_today((self.clock)())
            .with_snapshot(snapshot);
        Ok(Self::commit(state, next))
    }

    fn commit(state: &mut CalendarState, next: CalendarState) -> ViewUpdate {
        let changes = next.changes_since(state);
        let view = next.view();
        *state = next;
        ViewUpdate { view, changes }
    }
}
