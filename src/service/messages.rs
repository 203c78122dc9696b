use crate::error::RoomsError;
use crate::service::RoomsService;

impl RoomsService {
    /// 追加消息引用到房间的有序列表
    /// Append a message reference to the room's ordered list
    ///
    /// 只登记引用，不触发最近消息快照刷新 —— 刷新由消息方显式调用投影器。
    /// Only the reference is recorded, the recent-message snapshot is not
    /// refreshed here -- the messaging side invokes the projector explicitly.
    pub async fn add_message_reference(
        &self,
        room_id: &str,
        message_id: &str,
    ) -> Result<(), RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or(RoomsError::NotFound)?;
        room.messages_id.push(message_id.to_string());
        self.rooms.update(&room).await?;
        Ok(())
    }

    /// 按 id 定位并移除消息引用；不存在返回未找到
    /// Locate and remove a message reference by id; absence is NotFound
    pub async fn delete_message_reference(
        &self,
        room_id: &str,
        message_id: &str,
    ) -> Result<(), RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or(RoomsError::NotFound)?;
        let position = room
            .messages_id
            .iter()
            .position(|id| id == message_id)
            .ok_or(RoomsError::NotFound)?;
        room.messages_id.remove(position);
        self.rooms.update(&room).await?;
        Ok(())
    }
}
