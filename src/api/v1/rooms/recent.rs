use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRecentRequest {
    pub room_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(refresh_recent_handle)));
}

// 消息方在写入消息后显式调用 / The messaging side calls this explicitly
// after inserting a message
pub async fn refresh_recent_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<RefreshRecentRequest>,
) -> Result<HttpResponse, RoomsError> {
    let recent = server.service.refresh_recent_message(&req.room_id).await?;
    Ok(respond_any(StatusCode::CREATED, recent))
}
