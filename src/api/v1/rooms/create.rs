use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::RoomSpec;
use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub user_id: String,
    pub room: RoomSpec,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(create_room_handle)));
}

pub async fn create_room_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<CreateRoomRequest>,
) -> Result<HttpResponse, RoomsError> {
    let req = req.into_inner();
    let room = server.service.create_room(&req.user_id, req.room).await?;
    Ok(respond_any(
        StatusCode::CREATED,
        serde_json::json!({ "roomId": room.id }),
    ))
}
