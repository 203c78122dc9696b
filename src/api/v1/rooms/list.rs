use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::get().to(room_list_handle)));
}

// 无过滤、无分页的全量列表 / Unfiltered, unpaginated full listing
pub async fn room_list_handle(
    server: web::Data<Arc<RoomsServer>>,
) -> Result<HttpResponse, RoomsError> {
    let rooms = server.service.get_all_rooms().await?;
    Ok(respond_any(StatusCode::OK, rooms))
}
