use tracing::debug;

use crate::domain::{Right, Rights};
use crate::error::RoomsError;
use crate::service::RoomsService;

impl RoomsService {
    /// 替换目标成员的整套权限，需要 CHANGE_USER_RIGHTS
    /// Replace the target member's whole rights set, requires
    /// CHANGE_USER_RIGHTS
    ///
    /// 替换是整体覆盖而非增量；目标无存量记录时返回 BadRequest。
    /// The replace is wholesale, not additive; a target without a stored
    /// record yields BadRequest.
    pub async fn change_user_rights_in_room(
        &self,
        claimed: &[Right],
        performer_id: &str,
        target_id: &str,
        room_id: &str,
        new_rights: Vec<Right>,
    ) -> Result<(), RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        if !self
            .verify_rights(claimed, performer_id, room_id, Right::ChangeUserRights)
            .await?
        {
            debug!(
                "change-user-rights 未授权 / unauthorized: performer={}",
                performer_id
            );
            return Err(RoomsError::Unauthorized);
        }

        let modified = self.rights.replace(target_id, room_id, &new_rights).await?;
        if modified == 0 {
            return Err(RoomsError::bad_request("no rights record for target"));
        }
        Ok(())
    }

    /// 读取 (user, room) 的权限记录；无记录不是错误
    /// Load the (user, room) rights record; absence is not an error
    pub async fn load_rights(
        &self,
        user_id: &str,
        room_id: &str,
    ) -> Result<Option<Rights>, RoomsError> {
        Ok(self.rights.find(user_id, room_id).await?)
    }
}
