// 领域实体定义 / Domain entity definitions

pub mod message;
pub mod notifications;
pub mod rights;
pub mod room;
pub mod user;

pub use message::{Message, MessageAuthor};
pub use notifications::NotificationSettings;
pub use rights::{Right, Rights};
pub use room::{RecentMessage, Room, RoomPatch, RoomSpec, SearchHit, UserRoomView};
pub use user::{UserIdentifier, UserProfile};
