use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::Right;
use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePhotoRequest {
    pub rights: Vec<Right>,
    pub user_id: String,
    pub room_id: String,
    /// 图片内容（data-URI 或原始字节的文本形式），按字节转交媒体托管方
    /// Image payload (data-URI or raw bytes as text), handed to the media
    /// host as bytes
    pub photo: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(change_photo_handle)));
}

pub async fn change_photo_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<ChangePhotoRequest>,
) -> Result<HttpResponse, RoomsError> {
    let req = req.into_inner();
    let room = server
        .service
        .change_room_photo(&req.rights, &req.user_id, &req.room_id, req.photo.as_bytes())
        .await?;
    Ok(respond_any(StatusCode::OK, room))
}
