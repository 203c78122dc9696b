use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 用户在某房间的通知开关，键为 (user, roomId)
/// Per-(user, room) notification toggle
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub user: String,
    pub room_id: String,
    pub notifications: bool,
}
