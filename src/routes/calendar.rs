use actix_web::web;

use crate::database::RecordStore;
use crate::handlers::calendar;

pub fn configure<S: RecordStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calendar")
            .route("", web::get().to(calendar::get_calendar::<S>))
            .route("/month", web::post().to(calendar::change_month::<S>))
            .route("/select", web::post().to(calendar::select_date::<S>))
            .route("/reload", web::post().to(calendar::reload::<S>)),
    );
}
