//! 实体存储接口 / Entity store interfaces
//!
//! 存储后端对本服务而言是外部协作方：这里只约定访问模式，
//! 不关心驱动与连接管理。三个逻辑分区（账户、房间、消息）各自独立，
//! 接口之间没有跨实体事务。
//! Storage backends are external collaborators for this service: only the
//! access pattern is specified here, drivers and connection management are
//! out of scope. The three logical partitions (accounts, rooms, messages)
//! are independent, there are no cross-entity transactions between
//! interfaces.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Message, NotificationSettings, Right, Rights, Room, UserProfile};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// 存储错误 / Store error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("存储后端错误 / storage backend error: {message}")]
    Backend { message: String },
    #[error("序列化错误 / serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    pub fn backend<T: Into<String>>(message: T) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// 房间存储 / Room store
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// 创建记录，同键覆盖语义由实现决定 / Create, overwrite semantics up to impl
    async fn create(&self, room: &Room) -> StoreResult<()>;

    async fn find(&self, room_id: &str) -> StoreResult<Option<Room>>;

    /// 按名称精确查找（欢迎房间模板定位用）
    /// Exact lookup by name (locates the welcome-room template)
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Room>>;

    async fn list_all(&self) -> StoreResult<Vec<Room>>;

    /// 名称大小写不敏感子串匹配，仅限非私有房间
    /// Case-insensitive substring match on name, non-private rooms only
    async fn search_public_by_name(&self, pattern: &str) -> StoreResult<Vec<Room>>;

    /// 整档更新，返回匹配条数 / Whole-document update, returns matched count
    async fn update(&self, room: &Room) -> StoreResult<u64>;

    /// 删除，返回删除条数 / Delete, returns deleted count
    async fn delete(&self, room_id: &str) -> StoreResult<u64>;
}

/// 权限存储 / Rights store
#[async_trait]
pub trait RightsStore: Send + Sync {
    async fn create(&self, rights: &Rights) -> StoreResult<()>;

    async fn find(&self, user_id: &str, room_id: &str) -> StoreResult<Option<Rights>>;

    /// 授权谓词：(user, room) 的存量记录是否包含指定标志
    /// Authorization predicate: does the stored (user, room) record hold
    /// the given flag
    async fn exists_with(&self, user_id: &str, room_id: &str, right: Right) -> StoreResult<bool>;

    /// 整体替换权限集（非增量），返回修改条数
    /// Wholesale replace of the set (not additive), returns modified count
    async fn replace(&self, user_id: &str, room_id: &str, rights: &[Right]) -> StoreResult<u64>;
}

/// 通知设置存储 / Notification settings store
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn create(&self, settings: &NotificationSettings) -> StoreResult<()>;

    async fn find(&self, user_id: &str, room_id: &str) -> StoreResult<Option<NotificationSettings>>;

    async fn list_for_user(&self, user_id: &str) -> StoreResult<Vec<NotificationSettings>>;

    /// 返回修改条数 / Returns modified count
    async fn update(&self, user_id: &str, room_id: &str, enabled: bool) -> StoreResult<u64>;
}

/// 消息存储（只读）：按插入顺序取房间内最新一条
/// Message store (read-only): latest message per room by insertion order
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn latest_for_room(&self, room_id: &str) -> StoreResult<Option<Message>>;
}

/// 用户档案存储（只读）/ User profile store (read-only)
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserProfile>>;
    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<UserProfile>>;
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserProfile>>;

    /// 批量展开成员档案，缺失的 id 被跳过
    /// Expand member profiles in bulk, missing ids are skipped
    async fn find_profiles(&self, user_ids: &[String]) -> StoreResult<Vec<UserProfile>>;

    /// 用户名大小写不敏感子串匹配 / Case-insensitive substring match on username
    async fn search_by_name(&self, pattern: &str) -> StoreResult<Vec<UserProfile>>;
}
