pub mod add_user;
pub mod create;
pub mod delete;
pub mod delete_user;
pub mod enter;
pub mod list;
pub mod message_add;
pub mod message_delete;
pub mod photo;
pub mod recent;
pub mod search;
pub mod update;
pub mod user_rooms;
pub mod welcome;
