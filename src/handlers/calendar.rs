use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::database::RecordStore;
use crate::handlers::shared::ApiResponse;
use crate::services::CalendarService;

#[derive(Debug, Deserialize)]
pub struct MonthChangeRequest {
    /// Months to move; negative goes back
    pub direction: i32,
}

#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    pub date: String,
}

pub async fn get_calendar<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
) -> Result<HttpResponse> {
    let view = service.view().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(view)))
}

pub async fn change_month<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
    input: web::Json<MonthChangeRequest>,
) -> Result<HttpResponse> {
    let update = service.change_month(input.direction).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(update)))
}

pub async fn select_date<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
    input: web::Json<SelectDateRequest>,
) -> Result<HttpResponse> {
    let update = service.select_date(&input.date).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(update)))
}

pub async fn reload<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
) -> Result<HttpResponse> {
    let update = service.reload().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(update)))
}
