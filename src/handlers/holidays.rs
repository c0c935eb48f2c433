use actix_web::{HttpResponse, Result, web};

use crate::database::RecordStore;
use crate::handlers::shared::ApiResponse;
use crate::services::{CalendarService, HolidaySubmission};

pub async fn create_holiday<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
    input: web::Json<HolidaySubmission>,
) -> Result<HttpResponse> {
    let update = service.add_holiday(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(update, "Holiday added")))
}
