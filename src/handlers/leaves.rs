use actix_web::{HttpResponse, Result, web};

use crate::database::RecordStore;
use crate::handlers::shared::ApiResponse;
use crate::services::{CalendarService, LeaveSubmission};

pub async fn create_leave<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
    input: web::Json<LeaveSubmission>,
) -> Result<HttpResponse> {
    let update = service.add_leave(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(update, "Leave recorded")))
}
