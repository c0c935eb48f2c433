use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::database::RecordStore;
use crate::handlers::shared::ApiResponse;
use crate::services::{CalendarService, QuotaSubmission};

#[derive(Debug, Deserialize)]
pub struct QuotaUpdateRequest {
    pub quotas: Vec<QuotaSubmission>,
}

pub async fn get_quotas<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
) -> Result<HttpResponse> {
    let quotas = service.quotas().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(quotas)))
}

pub async fn update_quotas<S: RecordStore + 'static>(
    service: web::Data<CalendarService<S>>,
    input: web::Json<QuotaUpdateRequest>,
) -> Result<HttpResponse> {
    let update = service.update_quotas(input.into_inner().quotas).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(update, "Quotas saved")))
}
