use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::message::MessageAuthor;
use crate::domain::user::UserProfile;

/// 房间上缓存的最近消息快照（反规范化，由投影器按需刷新）
/// Denormalized recent-message snapshot cached on a room, refreshed on
/// demand by the projector
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentMessage {
    pub id: String,
    pub user: MessageAuthor,
    pub room_id: String,
    pub text: String,
    pub attachment: Vec<String>,
    /// 字符串时间戳，允许 "loading..." 哨兵值
    /// String timestamp, allows the "loading..." sentinel
    pub timestamp: String,
}

impl RecentMessage {
    /// 新房间使用的占位快照 / Placeholder snapshot for a fresh room
    pub fn placeholder(room_id: &str) -> Self {
        Self {
            id: String::new(),
            user: MessageAuthor {
                id: String::new(),
                username: "Loading...".to_string(),
            },
            room_id: room_id.to_string(),
            text: "loading...".to_string(),
            attachment: vec!["loading...".to_string()],
            timestamp: "loading...".to_string(),
        }
    }
}

/// 房间实体 / Room entity
///
/// `usersID` 与 `membersCount` 的一致性由调用方维护，本服务保留字段原值；
/// 空成员房间只在退出路径上被清理。
/// Consistency between `usersID` and `membersCount` is maintained by
/// callers, this service preserves the field as given; empty rooms are only
/// cleaned up on the leave path.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub photo: String,
    pub is_user: bool,
    pub is_private: bool,
    #[serde(rename = "usersID")]
    pub users_id: Vec<String>,
    #[serde(rename = "messagesID")]
    pub messages_id: Vec<String>,
    pub recent_message: RecentMessage,
    pub members_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 创建房间的载荷 / Room creation payload
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_user: bool,
    pub is_private: bool,
    #[serde(default)]
    pub members_count: Option<u32>,
}

/// 房间更新补丁：字段仅在"非空值"时覆盖存量数据，
/// 显式清空（空串/false/0）与未提供不可区分，会被忽略 —— 有意保留的边界行为
/// Room update patch: a field overwrites stored data only when "truthy";
/// an explicit reset (empty string / false / 0) is indistinguishable from
/// absent and gets ignored -- an intentional boundary behavior
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub members_count: Option<u32>,
}

/// 成员展开后的房间视图，用于 get-all-user-rooms
/// Room view with members expanded into profiles, for get-all-user-rooms
#[derive(Serialize, JsonSchema, Debug, Clone)]
pub struct UserRoomView {
    #[serde(flatten)]
    pub room: Room,
    pub users: Vec<UserProfile>,
}

/// 按名称搜索的混合结果：房间或用户
/// Mixed search result by name: a room or a user
#[derive(Serialize, JsonSchema, Debug, Clone)]
#[serde(untagged)]
pub enum SearchHit {
    Room(Room),
    User(UserProfile),
}
