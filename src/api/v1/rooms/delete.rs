use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::Right;
use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRoomRequest {
    pub rights: Vec<Right>,
    pub user_id: String,
    pub room_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(delete_room_handle)));
}

pub async fn delete_room_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<DeleteRoomRequest>,
) -> Result<HttpResponse, RoomsError> {
    server
        .service
        .delete_room(&req.rights, &req.user_id, &req.room_id)
        .await?;
    Ok(respond_any(
        StatusCode::OK,
        serde_json::json!({ "roomId": req.room_id }),
    ))
}
