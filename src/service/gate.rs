use crate::domain::Right;
use crate::error::RoomsError;
use crate::service::RoomsService;

impl RoomsService {
    /// 授权闸口 / Authorization gate
    ///
    /// 调用方携带的权限集只是预过滤，存储中的记录才是权威来源：
    /// 两者都包含所需标志才放行。(user, room) 无记录返回 false，
    /// 不抛错；存储故障作为内部错误向上传播。
    /// The caller-claimed set is only a pre-filter, the stored record is
    /// authoritative: both must contain the required flag. A missing
    /// (user, room) record yields false, never an error; store faults
    /// propagate as internal errors.
    pub async fn verify_rights(
        &self,
        claimed: &[Right],
        user_id: &str,
        room_id: &str,
        required: Right,
    ) -> Result<bool, RoomsError> {
        if !claimed.contains(&required) {
            return Ok(false);
        }
        Ok(self.rights.exists_with(user_id, room_id, required).await?)
    }
}
