use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeChatRequest {
    pub user_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(welcome_chat_handle)));
}

pub async fn welcome_chat_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<WelcomeChatRequest>,
) -> Result<HttpResponse, RoomsError> {
    let room = server.service.add_welcome_chat(&req.user_id).await?;
    Ok(respond_any(
        StatusCode::CREATED,
        serde_json::json!({ "roomId": room.id }),
    ))
}
