use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::Right;
use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;
use crate::service::{DeleteMode, RemovalOutcome};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    pub rights: Vec<Right>,
    pub user_id: String,
    pub user_id_to_be_deleted: String,
    pub room_id: String,
    #[serde(rename = "type")]
    pub mode: DeleteMode,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(delete_user_handle)));
}

pub async fn delete_user_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<DeleteUserRequest>,
) -> Result<HttpResponse, RoomsError> {
    let outcome = server
        .service
        .delete_user_from_room(
            &req.rights,
            &req.user_id,
            &req.user_id_to_be_deleted,
            &req.room_id,
            req.mode,
        )
        .await?;
    // 末位成员退出删除整间房返回 OK，普通移除返回 CREATED
    // Deleting the room on last-member exit answers OK, a plain removal CREATED
    let code = match outcome {
        RemovalOutcome::RoomDeleted => StatusCode::OK,
        RemovalOutcome::MemberRemoved => StatusCode::CREATED,
    };
    Ok(respond_any(
        code,
        serde_json::json!({ "roomId": req.room_id }),
    ))
}
