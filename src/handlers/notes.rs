use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::database::RecordStore;
use crate::handlers::shared::ApiResponse;
use crate::services::{CalendarService, NoteSubmission};

#[derive(Debug, Deserialize)]
pub struct NotesQuery {
    /// Falls back to the selected date
    pub date: Option<String>,
}

pub async fn get_notes<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
    query: web::Query<NotesQuery>,
) -> Result<HttpResponse> {
    let notes = service.notes_for(query.date.as_deref()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(notes)))
}

pub async fn create_note<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
    input: web::Json<NoteSubmission>,
) -> Result<HttpResponse> {
    let update = service.add_note(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(update, "Note added")))
}
