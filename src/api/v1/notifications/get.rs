use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsQuery {
    pub user_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::get().to(get_notifications_handle)));
}

pub async fn get_notifications_handle(
    server: web::Data<Arc<RoomsServer>>,
    query: web::Query<NotificationsQuery>,
) -> Result<HttpResponse, RoomsError> {
    let settings = server
        .service
        .get_user_notifications_settings(&query.user_id)
        .await?;
    Ok(respond_any(StatusCode::OK, settings))
}
