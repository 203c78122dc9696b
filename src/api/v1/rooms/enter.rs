use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterPublicRoomRequest {
    pub user_id: String,
    pub room_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(enter_public_room_handle)));
}

// 自助加入，无授权检查；房间确实公开由调用方保证
// Self-service join, no authorization; the caller guarantees the room is public
pub async fn enter_public_room_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<EnterPublicRoomRequest>,
) -> Result<HttpResponse, RoomsError> {
    server
        .service
        .enter_public_room(&req.user_id, &req.room_id)
        .await?;
    Ok(respond_any(
        StatusCode::OK,
        serde_json::json!({ "roomId": req.room_id, "userId": req.user_id }),
    ))
}
