use actix_web::web;

use crate::api::v1;

/// 路由配置包装：每个命令一个稳定的路径键
/// Route configuration wrapper: one stable path key per command
pub fn configure(cfg: &mut web::ServiceConfig) {
    v1::rooms::create::register(cfg, "/v1/rooms/create-room");
    v1::rooms::welcome::register(cfg, "/v1/rooms/add-welcome-chat");
    v1::rooms::list::register(cfg, "/v1/rooms/get-all-rooms");
    v1::rooms::user_rooms::register(cfg, "/v1/rooms/get-all-user-rooms");
    v1::rooms::search::register(cfg, "/v1/rooms/find-room-and-users-by-name");
    v1::rooms::update::register(cfg, "/v1/rooms/update-room");
    v1::rooms::photo::register(cfg, "/v1/rooms/change-room-photo");
    v1::rooms::delete::register(cfg, "/v1/rooms/delete-room");
    v1::rooms::add_user::register(cfg, "/v1/rooms/add-user");
    v1::rooms::enter::register(cfg, "/v1/rooms/enter-public-room");
    v1::rooms::delete_user::register(cfg, "/v1/rooms/delete-user");
    v1::rooms::message_add::register(cfg, "/v1/rooms/add-message-reference");
    v1::rooms::message_delete::register(cfg, "/v1/rooms/delete-message-reference");
    v1::rooms::recent::register(cfg, "/v1/rooms/add-recent-message");
    v1::rights::change::register(cfg, "/v1/rooms/change-user-rights");
    v1::rights::load::register(cfg, "/v1/rooms/load-rights");
    v1::notifications::change::register(cfg, "/v1/rooms/change-notifications-settings");
    v1::notifications::get::register(cfg, "/v1/rooms/get-notifications-settings");
    v1::health::basic::register(cfg, "/v1/health");
}
