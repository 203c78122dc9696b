use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::response::respond_any;
use crate::server::RoomsServer;

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::get().to(health_handle)));
}

pub async fn health_handle(server: web::Data<Arc<RoomsServer>>) -> HttpResponse {
    respond_any(StatusCode::OK, server.health())
}
