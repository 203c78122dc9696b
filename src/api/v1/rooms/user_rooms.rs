use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoomsQuery {
    pub user_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::get().to(user_rooms_handle)));
}

pub async fn user_rooms_handle(
    server: web::Data<Arc<RoomsServer>>,
    query: web::Query<UserRoomsQuery>,
) -> Result<HttpResponse, RoomsError> {
    let rooms = server.service.get_all_user_rooms(&query.user_id).await?;
    Ok(respond_any(StatusCode::OK, rooms))
}
