use actix_web::web;

use crate::database::RecordStore;
use crate::handlers::{holidays, leaves, notes, quotas};

pub fn configure<S: RecordStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/leaves", web::post().to(leaves::create_leave::<S>))
        .route("/holidays", web::post().to(holidays::create_holiday::<S>))
        .service(
            web::scope("/quotas")
                .route("", web::get().to(quotas::get_quotas::<S>))
                .route("", web::put().to(quotas::update_quotas::<S>)),
        )
        .service(
            web::scope("/notes")
                .route("", web::get().to(notes::get_notes::<S>))
                .route("", web::post().to(notes::create_note::<S>)),
        );
}
