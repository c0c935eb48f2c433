use actix_web::{HttpRequest, HttpResponse, web};

use crate::database::RecordStore;
use crate::error::AppError;
use crate::handlers;

pub mod calendar;
pub mod records;

/// Mounts the health check and the `/api/v1` calendar API for a store type.
pub fn configure<S: RecordStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    )
    .service(handlers::health)
    .service(
        web::scope("/api/v1")
            .configure(calendar::configure::<S>)
            .configure(records::configure::<S>),
    )
    .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("No route for {}", req.path())))
}
