use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRightsQuery {
    pub user_id: String,
    pub room_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::get().to(load_rights_handle)));
}

// 缺记录不是故障，用 404 空体表达 / A missing record is not a fault,
// expressed as 404 with an empty body
pub async fn load_rights_handle(
    server: web::Data<Arc<RoomsServer>>,
    query: web::Query<LoadRightsQuery>,
) -> Result<HttpResponse, RoomsError> {
    match server
        .service
        .load_rights(&query.user_id, &query.room_id)
        .await?
    {
        Some(rights) => Ok(respond_any(StatusCode::OK, rights)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}
