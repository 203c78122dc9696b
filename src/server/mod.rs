use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::config::AppConfig;
use crate::media::{HttpMediaHost, MediaHost};
use crate::service::RoomsService;
use crate::storage::memory::{
    MemoryMessageStore, MemoryNotificationStore, MemoryRightsStore, MemoryRoomStore,
    MemoryUserStore,
};
use crate::storage::{MessageStore, NotificationStore, RightsStore, RoomStore, UserStore};

/// 服务端全局状态 / Server global state
pub struct RoomsServer {
    pub service: RoomsService,
    pub started_at: DateTime<Utc>,
}

impl RoomsServer {
    /// 按配置构建默认实例：内存存储 + HTTP 媒体托管
    /// Build the default instance from config: memory stores + HTTP media host
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let media: Arc<dyn MediaHost> = Arc::new(HttpMediaHost::new(&config.media)?);
        Ok(Self::with_stores(
            Arc::new(MemoryRoomStore::new()),
            Arc::new(MemoryRightsStore::new()),
            Arc::new(MemoryNotificationStore::new()),
            Arc::new(MemoryMessageStore::new()),
            Arc::new(MemoryUserStore::new()),
            media,
            config,
        ))
    }

    /// 注入自定义存储后端 / Wire custom storage backends
    pub fn with_stores(
        rooms: Arc<dyn RoomStore>,
        rights: Arc<dyn RightsStore>,
        notifications: Arc<dyn NotificationStore>,
        messages: Arc<dyn MessageStore>,
        users: Arc<dyn UserStore>,
        media: Arc<dyn MediaHost>,
        config: &AppConfig,
    ) -> Self {
        Self {
            service: RoomsService::new(
                rooms,
                rights,
                notifications,
                messages,
                users,
                media,
                config.rooms.clone(),
            ),
            started_at: Utc::now(),
        }
    }

    /// 基础健康状态 / Basic health status
    pub fn health(&self) -> serde_json::Value {
        json!({
            "status": "ok",
            "uptime_seconds": (Utc::now() - self.started_at).num_seconds(),
        })
    }
}
