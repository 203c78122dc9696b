//! 房间生命周期管理器 / Room Lifecycle Manager
//!
//! 所有入站操作都从这里进入：除创建与自助操作外，每个变更先过授权闸口，
//! 再读写存储。三个集合（房间、权限、通知）之间没有事务，多实体写入
//! 失败后不回滚；同一房间的变更通过房间级互斥锁串行化，授权校验与
//! 变更在同一临界区内完成。
//! Every inbound operation enters here: apart from creation and
//! self-service paths, each mutation passes the authorization gate before
//! touching any store. The three collections (rooms, rights, notifications)
//! are not transactional, a failed multi-entity write is not rolled back;
//! mutations of one room are serialized through a per-room mutex and the
//! authorization check runs inside the same critical section.

mod gate;
mod lifecycle;
mod messages;
mod notifications;
mod projector;
mod rights;

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::RoomsDefaults;
use crate::media::MediaHost;
use crate::storage::{MessageStore, NotificationStore, RightsStore, RoomStore, UserStore};

/// 成员移除的两种模式 / The two member-removal modes
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeleteMode {
    /// 管理员移除任意成员，需要 DELETE_USERS / Admin removal, needs DELETE_USERS
    DeleteUser,
    /// 自助退出，只要求操作者即目标 / Self exit, only requires caller == target
    LeaveRoom,
}

/// 成员移除的结果 / Member-removal outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// 最后一名成员退出，房间被整体删除 / Last member left, the room was deleted
    RoomDeleted,
    MemberRemoved,
}

pub struct RoomsService {
    pub(crate) rooms: Arc<dyn RoomStore>,
    pub(crate) rights: Arc<dyn RightsStore>,
    pub(crate) notifications: Arc<dyn NotificationStore>,
    pub(crate) messages: Arc<dyn MessageStore>,
    pub(crate) users: Arc<dyn UserStore>,
    pub(crate) media: Arc<dyn MediaHost>,
    pub(crate) defaults: RoomsDefaults,
    /// 房间级串行化点，消除整档读改写的丢失更新
    /// Per-room serialization point, closes the read-modify-write lost update
    room_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl RoomsService {
    pub fn new(
        rooms: Arc<dyn RoomStore>,
        rights: Arc<dyn RightsStore>,
        notifications: Arc<dyn NotificationStore>,
        messages: Arc<dyn MessageStore>,
        users: Arc<dyn UserStore>,
        media: Arc<dyn MediaHost>,
        defaults: RoomsDefaults,
    ) -> Self {
        Self {
            rooms,
            rights,
            notifications,
            messages,
            users,
            media,
            defaults,
            room_locks: DashMap::new(),
        }
    }

    pub(crate) fn room_lock(&self, room_id: &str) -> Arc<Mutex<()>> {
        self.room_locks
            .entry(room_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// 房间删除后释放锁条目 / Drop the lock entry after room deletion
    pub(crate) fn forget_room_lock(&self, room_id: &str) {
        self.room_locks.remove(room_id);
    }
}
