use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 权限标志：每个标志门控一类房间内操作，标志之间没有层级关系
/// Permission flag: each flag gates one class of in-room mutation, no
/// hierarchy between flags
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Right {
    SendMessages,
    SendAttachments,
    DeleteMessages,
    AddUsers,
    DeleteUsers,
    ChangeUserRights,
    ChangeRoom,
    DeleteRoom,
    UpdateMessage,
    /// 自助退出房间使用的保留标志 / Reserved flag for self-service exit
    LeaveRoom,
}

impl Right {
    /// 房间创建者获得的完整权限集 / Full set granted to a room creator
    pub const ALL: [Right; 10] = [
        Right::SendMessages,
        Right::SendAttachments,
        Right::DeleteMessages,
        Right::AddUsers,
        Right::DeleteUsers,
        Right::ChangeUserRights,
        Right::ChangeRoom,
        Right::DeleteRoom,
        Right::UpdateMessage,
        Right::LeaveRoom,
    ];

    /// 公开房间自助加入时授予的基础权限集
    /// Baseline set granted on public self-entry
    pub const PUBLIC_ENTRY: [Right; 3] = [
        Right::SendMessages,
        Right::SendAttachments,
        Right::UpdateMessage,
    ];

    /// 欢迎房间授予的权限集 / Set granted in the welcome room
    pub const WELCOME: [Right; 1] = [Right::DeleteRoom];
}

/// 某用户在某房间持有的权限记录，键为 (user, roomId)
/// Rights record a user holds within a room, keyed by (user, roomId)
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rights {
    pub user: String,
    pub room_id: String,
    pub rights: Vec<Right>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wire_names_are_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Right::ChangeUserRights).unwrap(),
            "\"CHANGE_USER_RIGHTS\""
        );
        let parsed: Right = serde_json::from_str("\"LEAVE_ROOM\"").unwrap();
        assert_eq!(parsed, Right::LeaveRoom);
    }

    #[test]
    fn full_set_holds_every_distinct_flag() {
        let unique: HashSet<Right> = Right::ALL.into_iter().collect();
        assert_eq!(unique.len(), 10);
        for right in Right::PUBLIC_ENTRY {
            assert!(unique.contains(&right));
        }
    }
}
