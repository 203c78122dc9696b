use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::Right;
use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub rights: Vec<Right>,
    pub user_id: String,
    pub room_id: String,
    /// 邮箱 / 手机号 / 用户名，形态决定唯一一种查找策略
    /// Email / phone / username, the shape selects exactly one lookup
    pub new_user_identifier: String,
    pub user_rights: Vec<Right>,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(add_user_handle)));
}

pub async fn add_user_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<AddUserRequest>,
) -> Result<HttpResponse, RoomsError> {
    let req = req.into_inner();
    server
        .service
        .add_user_to_room(
            &req.rights,
            &req.user_id,
            &req.room_id,
            &req.new_user_identifier,
            req.user_rights,
        )
        .await?;
    Ok(respond_any(
        StatusCode::CREATED,
        serde_json::json!({ "roomId": req.room_id }),
    ))
}
