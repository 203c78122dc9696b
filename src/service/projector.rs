use crate::domain::RecentMessage;
use crate::error::RoomsError;
use crate::service::RoomsService;

impl RoomsService {
    /// 最近消息投影器 / Recent-message projector
    ///
    /// 取房间内最近插入的一条消息（自然顺序，而非时间戳排序），投影为
    /// 最小快照并覆盖房间缓存。房间无消息时返回 BadRequest，不做任何写入。
    /// Fetches the most recently inserted message of the room (natural
    /// order, not timestamp order), projects the minimal snapshot and
    /// overwrites the cache on the room. A room without messages yields
    /// BadRequest and nothing is written.
    pub async fn refresh_recent_message(
        &self,
        room_id: &str,
    ) -> Result<RecentMessage, RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or(RoomsError::NotFound)?;

        let latest = self
            .messages
            .latest_for_room(room_id)
            .await?
            .ok_or_else(|| RoomsError::bad_request("room has no messages"))?;

        let recent = latest.to_recent();
        room.recent_message = recent.clone();
        self.rooms.update(&room).await?;
        Ok(recent)
    }
}
