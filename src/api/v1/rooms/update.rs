use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::{Right, RoomPatch};
use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    pub rights: Vec<Right>,
    pub user_id: String,
    pub room_id: String,
    pub room: RoomPatch,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(update_room_handle)));
}

pub async fn update_room_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<UpdateRoomRequest>,
) -> Result<HttpResponse, RoomsError> {
    let req = req.into_inner();
    let room = server
        .service
        .update_room(&req.rights, &req.user_id, &req.room_id, req.room)
        .await?;
    Ok(respond_any(StatusCode::OK, room))
}
