use crate::data::state::HttpState;
use crate::telemetry::generator;

use actix_web::http::header;
use actix_web::web::Data;
use actix_web::HttpResponse;
use actix_web::Responder;

use log::debug;

pub async fn get(state: Data<HttpState>) -> impl Responder {
    let mut entropy = state.entropy();

    let snapshot = generator::generate(entropy.as_mut());

    debug!("generated telemetry snapshot {:?}", snapshot);

    HttpResponse::Ok().json(snapshot)
}

/// The path exists, only the method is wrong.
pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET"))
        .finish()
}
