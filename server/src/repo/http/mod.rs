pub mod cors;
pub mod telemetry;

use actix_web::web;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/telemetry")
            .route(web::get().to(telemetry::get))
            .default_service(web::to(telemetry::method_not_allowed)),
    );
}
