use crate::domain::NotificationSettings;
use crate::error::RoomsError;
use crate::service::RoomsService;

impl RoomsService {
    /// 修改通知开关；记录随成员关系创建，不存在时视为未找到
    /// Toggle notifications; the record is created with membership, a
    /// missing one is NotFound
    pub async fn change_notification_settings(
        &self,
        user_id: &str,
        room_id: &str,
        enabled: bool,
    ) -> Result<(), RoomsError> {
        let modified = self.notifications.update(user_id, room_id, enabled).await?;
        if modified == 0 {
            return Err(RoomsError::NotFound);
        }
        Ok(())
    }

    /// 用户的全部通知设置 / All notification settings of a user
    pub async fn get_user_notifications_settings(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationSettings>, RoomsError> {
        Ok(self.notifications.list_for_user(user_id).await?)
    }
}
