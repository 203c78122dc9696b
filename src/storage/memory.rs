//! 内存存储后端 / In-memory storage backend
//!
//! 默认引导和测试使用的后端；生产部署把文档库驱动接到同一组 trait 上。
//! Backend used by the default bootstrap and the tests; production
//! deployments attach a document-store driver to the same traits.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;

use super::{
    MessageStore, NotificationStore, RightsStore, RoomStore, StoreResult, UserStore,
};
use crate::domain::{Message, NotificationSettings, Right, Rights, Room, UserProfile};

/// 内存房间存储 / In-memory room store
#[derive(Default)]
pub struct MemoryRoomStore {
    rooms: DashMap<String, Room>,
}

impl MemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomStore for MemoryRoomStore {
    async fn create(&self, room: &Room) -> StoreResult<()> {
        self.rooms.insert(room.id.clone(), room.clone());
        Ok(())
    }

    async fn find(&self, room_id: &str) -> StoreResult<Option<Room>> {
        Ok(self.rooms.get(room_id).map(|r| r.clone()))
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Room>> {
        Ok(self
            .rooms
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.clone()))
    }

    async fn list_all(&self) -> StoreResult<Vec<Room>> {
        Ok(self.rooms.iter().map(|r| r.clone()).collect())
    }

    async fn search_public_by_name(&self, pattern: &str) -> StoreResult<Vec<Room>> {
        let needle = pattern.to_lowercase();
        Ok(self
            .rooms
            .iter()
            .filter(|r| !r.is_private && r.name.to_lowercase().contains(&needle))
            .map(|r| r.clone())
            .collect())
    }

    async fn update(&self, room: &Room) -> StoreResult<u64> {
        match self.rooms.get_mut(&room.id) {
            Some(mut entry) => {
                *entry = room.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, room_id: &str) -> StoreResult<u64> {
        Ok(self.rooms.remove(room_id).map(|_| 1).unwrap_or(0))
    }
}

/// 内存权限存储，键为 (user, roomId) / In-memory rights store keyed by (user, roomId)
#[derive(Default)]
pub struct MemoryRightsStore {
    records: DashMap<(String, String), Rights>,
}

impl MemoryRightsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RightsStore for MemoryRightsStore {
    async fn create(&self, rights: &Rights) -> StoreResult<()> {
        self.records.insert(
            (rights.user.clone(), rights.room_id.clone()),
            rights.clone(),
        );
        Ok(())
    }

    async fn find(&self, user_id: &str, room_id: &str) -> StoreResult<Option<Rights>> {
        Ok(self
            .records
            .get(&(user_id.to_string(), room_id.to_string()))
            .map(|r| r.clone()))
    }

    async fn exists_with(&self, user_id: &str, room_id: &str, right: Right) -> StoreResult<bool> {
        Ok(self
            .records
            .get(&(user_id.to_string(), room_id.to_string()))
            .map(|r| r.rights.contains(&right))
            .unwrap_or(false))
    }

    async fn replace(&self, user_id: &str, room_id: &str, rights: &[Right]) -> StoreResult<u64> {
        match self
            .records
            .get_mut(&(user_id.to_string(), room_id.to_string()))
        {
            Some(mut entry) => {
                entry.rights = rights.to_vec();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// 内存通知设置存储 / In-memory notification settings store
#[derive(Default)]
pub struct MemoryNotificationStore {
    records: DashMap<(String, String), NotificationSettings>,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, settings: &NotificationSettings) -> StoreResult<()> {
        self.records.insert(
            (settings.user.clone(), settings.room_id.clone()),
            settings.clone(),
        );
        Ok(())
    }

    async fn find(
        &self,
        user_id: &str,
        room_id: &str,
    ) -> StoreResult<Option<NotificationSettings>> {
        Ok(self
            .records
            .get(&(user_id.to_string(), room_id.to_string()))
            .map(|r| r.clone()))
    }

    async fn list_for_user(&self, user_id: &str) -> StoreResult<Vec<NotificationSettings>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.user == user_id)
            .map(|r| r.clone())
            .collect())
    }

    async fn update(&self, user_id: &str, room_id: &str, enabled: bool) -> StoreResult<u64> {
        match self
            .records
            .get_mut(&(user_id.to_string(), room_id.to_string()))
        {
            Some(mut entry) => {
                entry.notifications = enabled;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// 内存消息存储：每房间一个按插入顺序的列表
/// In-memory message store: one insertion-ordered list per room
#[derive(Default)]
pub struct MemoryMessageStore {
    by_room: RwLock<Vec<Message>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 测试与联调用的注入入口 / Seeding entry for tests and wiring checks
    pub fn push(&self, message: Message) {
        self.by_room.write().push(message);
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn latest_for_room(&self, room_id: &str) -> StoreResult<Option<Message>> {
        // 插入顺序而非时间戳顺序 / Insertion order, not timestamp order
        Ok(self
            .by_room
            .read()
            .iter()
            .rev()
            .find(|m| m.room_id == room_id)
            .cloned())
    }
}

/// 内存用户档案存储 / In-memory user profile store
#[derive(Default)]
pub struct MemoryUserStore {
    users: DashMap<String, UserProfile>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, profile: UserProfile) {
        self.users.insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserProfile>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.clone()))
    }

    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<UserProfile>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.phone_number.as_deref() == Some(phone))
            .map(|u| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserProfile>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.clone()))
    }

    async fn find_profiles(&self, user_ids: &[String]) -> StoreResult<Vec<UserProfile>> {
        Ok(user_ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|u| u.clone()))
            .collect())
    }

    async fn search_by_name(&self, pattern: &str) -> StoreResult<Vec<UserProfile>> {
        let needle = pattern.to_lowercase();
        Ok(self
            .users
            .iter()
            .filter(|u| u.username.to_lowercase().contains(&needle))
            .map(|u| u.clone())
            .collect())
    }
}
