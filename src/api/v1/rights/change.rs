use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::Right;
use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeUserRightsRequest {
    pub rights: Vec<Right>,
    pub performer_user_id: String,
    pub target_user_id: String,
    pub room_id: String,
    pub new_rights: Vec<Right>,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(change_user_rights_handle)));
}

pub async fn change_user_rights_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<ChangeUserRightsRequest>,
) -> Result<HttpResponse, RoomsError> {
    let req = req.into_inner();
    server
        .service
        .change_user_rights_in_room(
            &req.rights,
            &req.performer_user_id,
            &req.target_user_id,
            &req.room_id,
            req.new_rights.clone(),
        )
        .await?;
    Ok(respond_any(
        StatusCode::CREATED,
        serde_json::json!({
            "roomId": req.room_id,
            "userId": req.target_user_id,
            "rights": req.new_rights,
        }),
    ))
}
