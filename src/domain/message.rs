use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::room::RecentMessage;

/// 消息作者的最小投影 / Minimal projection of a message author
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct MessageAuthor {
    pub id: String,
    pub username: String,
}

/// 消息实体（外部分区，本服务只读）
/// Message entity (external partition, read-only for this service)
///
/// 时间戳保持为字符串，与房间快照的占位哨兵值兼容。
/// Timestamp stays a string, compatible with the room snapshot's
/// placeholder sentinel.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub room_id: String,
    pub user: MessageAuthor,
    pub text: String,
    pub attachment: Vec<String>,
    pub timestamp: String,
}

impl Message {
    /// 投影为房间缓存的最近消息快照
    /// Project into the recent-message snapshot cached on the room
    pub fn to_recent(&self) -> RecentMessage {
        RecentMessage {
            id: self.id.clone(),
            user: self.user.clone(),
            room_id: self.room_id.clone(),
            text: self.text.clone(),
            attachment: self.attachment.clone(),
            timestamp: self.timestamp.clone(),
        }
    }
}
