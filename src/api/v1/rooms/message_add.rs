use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageReferenceRequest {
    pub room_id: String,
    pub message_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(add_message_reference_handle)));
}

pub async fn add_message_reference_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<AddMessageReferenceRequest>,
) -> Result<HttpResponse, RoomsError> {
    server
        .service
        .add_message_reference(&req.room_id, &req.message_id)
        .await?;
    Ok(respond_any(
        StatusCode::CREATED,
        serde_json::json!({ "roomId": req.room_id, "messageId": req.message_id }),
    ))
}
