use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotificationsRequest {
    pub user_id: String,
    pub room_id: String,
    pub notifications: bool,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::post().to(change_notifications_handle)));
}

pub async fn change_notifications_handle(
    server: web::Data<Arc<RoomsServer>>,
    req: web::Json<ChangeNotificationsRequest>,
) -> Result<HttpResponse, RoomsError> {
    server
        .service
        .change_notification_settings(&req.user_id, &req.room_id, req.notifications)
        .await?;
    Ok(respond_any(
        StatusCode::CREATED,
        serde_json::json!({
            "userId": req.user_id,
            "roomId": req.room_id,
            "notifications": req.notifications,
        }),
    ))
}
