use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::RoomsError;
use crate::response::respond_any;
use crate::server::RoomsServer;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub name: String,
    pub user_id: String,
}

pub fn register(cfg: &mut actix_web::web::ServiceConfig, path: &str) {
    cfg.service(web::resource(path).route(web::get().to(search_handle)));
}

pub async fn search_handle(
    server: web::Data<Arc<RoomsServer>>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, RoomsError> {
    let hits = server
        .service
        .find_room_and_users_by_name(&query.name, &query.user_id)
        .await?;
    Ok(respond_any(StatusCode::OK, hits))
}
