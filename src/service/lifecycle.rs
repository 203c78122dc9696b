use std::collections::HashSet;

use anyhow::anyhow;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    NotificationSettings, RecentMessage, Right, Rights, Room, RoomPatch, RoomSpec, SearchHit,
    UserIdentifier, UserRoomView,
};
use crate::error::RoomsError;
use crate::service::{DeleteMode, RemovalOutcome, RoomsService};

impl RoomsService {
    /// 创建房间：创建者无条件获得完整权限集并默认开启通知
    /// Create a room: the creator unconditionally gets the full rights set
    /// and notifications default to enabled
    pub async fn create_room(&self, user_id: &str, spec: RoomSpec) -> Result<Room, RoomsError> {
        let now = Utc::now();
        let room_id = Uuid::new_v4().to_string();
        let room = Room {
            id: room_id.clone(),
            name: spec.name,
            description: spec.description,
            photo: self.defaults.default_photo_url.clone(),
            is_user: spec.is_user,
            is_private: spec.is_private,
            users_id: vec![user_id.to_string()],
            messages_id: Vec::new(),
            recent_message: RecentMessage::placeholder(&room_id),
            members_count: spec.members_count.unwrap_or(1),
            created_at: now,
            updated_at: now,
        };

        self.rooms.create(&room).await?;
        self.rights
            .create(&Rights {
                user: user_id.to_string(),
                room_id: room_id.clone(),
                rights: Right::ALL.to_vec(),
            })
            .await?;
        self.notifications
            .create(&NotificationSettings {
                user: user_id.to_string(),
                room_id: room_id.clone(),
                notifications: true,
            })
            .await?;

        info!("房间已创建 / room created: {}", room_id);
        Ok(room)
    }

    /// 为新用户开通欢迎房间 / Provision the welcome room for a new user
    ///
    /// 从模板房间派生每用户稳定 id（模板 id + 用户 id 的 uuid-v5），
    /// 创建全新文档，从不改写模板本身；同一用户重复开通得到同一房间。
    /// Derives a stable per-user id (uuid-v5 over template id + user id)
    /// and creates a fresh document, the template itself is never mutated;
    /// repeated provisioning for one user yields the same room.
    pub async fn add_welcome_chat(&self, user_id: &str) -> Result<Room, RoomsError> {
        let template = self
            .rooms
            .find_by_name(&self.defaults.welcome_room_name)
            .await?
            .ok_or_else(|| {
                RoomsError::internal(anyhow!(
                    "欢迎房间模板缺失 / welcome-room template missing: {}",
                    self.defaults.welcome_room_name
                ))
            })?;

        let seed = format!("{}:{}", template.id, user_id);
        let room_id = Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()).to_string();
        let now = Utc::now();
        let room = Room {
            id: room_id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            photo: template.photo.clone(),
            is_user: template.is_user,
            is_private: template.is_private,
            users_id: vec![user_id.to_string()],
            messages_id: Vec::new(),
            recent_message: RecentMessage::placeholder(&room_id),
            members_count: 1,
            created_at: now,
            updated_at: now,
        };

        self.rooms.create(&room).await?;
        self.rights
            .create(&Rights {
                user: user_id.to_string(),
                room_id: room_id.clone(),
                rights: Right::WELCOME.to_vec(),
            })
            .await?;
        self.notifications
            .create(&NotificationSettings {
                user: user_id.to_string(),
                room_id: room_id.clone(),
                notifications: true,
            })
            .await?;

        info!("欢迎房间已开通 / welcome room provisioned: {}", room_id);
        Ok(room)
    }

    /// 无过滤全量房间列表，只读 / Unfiltered full room listing, read-only
    pub async fn get_all_rooms(&self) -> Result<Vec<Room>, RoomsError> {
        Ok(self.rooms.list_all().await?)
    }

    /// 用户所在房间列表，成员 id 展开为档案
    /// Rooms the user belongs to, member ids expanded into profiles
    ///
    /// 全量线性扫描，O(房间数 × 平均成员数)，小规模够用。
    /// Full linear scan, O(rooms x avg members), fine at small scale.
    pub async fn get_all_user_rooms(&self, user_id: &str) -> Result<Vec<UserRoomView>, RoomsError> {
        let mut result = Vec::new();
        for room in self.rooms.list_all().await? {
            if room.users_id.iter().any(|id| id == user_id) {
                let users = self.users.find_profiles(&room.users_id).await?;
                result.push(UserRoomView { room, users });
            }
        }
        Ok(result)
    }

    /// 按名称搜索房间与用户 / Search rooms and users by name
    ///
    /// 非私有房间与用户名做大小写不敏感子串匹配，再并入调用方已加入
    /// 且名称匹配的房间（含私有）；按实体 id 去重，不做值比较。
    /// Case-insensitive substring match over non-private room names and
    /// usernames, unioned with the caller's own name-matching rooms
    /// (private included); deduplicated by entity id, not by value.
    pub async fn find_room_and_users_by_name(
        &self,
        name: &str,
        user_id: &str,
    ) -> Result<Vec<SearchHit>, RoomsError> {
        let mut seen_rooms: HashSet<String> = HashSet::new();
        let mut seen_users: HashSet<String> = HashSet::new();
        let mut hits = Vec::new();

        for room in self.rooms.search_public_by_name(name).await? {
            if seen_rooms.insert(room.id.clone()) {
                hits.push(SearchHit::Room(room));
            }
        }
        for user in self.users.search_by_name(name).await? {
            if seen_users.insert(user.id.clone()) {
                hits.push(SearchHit::User(user));
            }
        }

        let needle = name.to_lowercase();
        for room in self.rooms.list_all().await? {
            if room.users_id.iter().any(|id| id == user_id)
                && room.name.to_lowercase().contains(&needle)
                && seen_rooms.insert(room.id.clone())
            {
                hits.push(SearchHit::Room(room));
            }
        }

        Ok(hits)
    }

    /// 更新房间，需要 CHANGE_ROOM / Update a room, requires CHANGE_ROOM
    ///
    /// 补丁字段只在非空值时覆盖；显式清空与未提供不可区分，被忽略。
    /// Patch fields only overwrite when truthy; an explicit reset is
    /// indistinguishable from absent and is ignored.
    pub async fn update_room(
        &self,
        claimed: &[Right],
        user_id: &str,
        room_id: &str,
        patch: RoomPatch,
    ) -> Result<Room, RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        if !self
            .verify_rights(claimed, user_id, room_id, Right::ChangeRoom)
            .await?
        {
            debug!("update-room 未授权 / unauthorized: user={}", user_id);
            return Err(RoomsError::Unauthorized);
        }

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or(RoomsError::NotFound)?;

        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            room.name = name;
        }
        if let Some(description) = patch.description.filter(|d| !d.is_empty()) {
            room.description = Some(description);
        }
        if patch.is_private == Some(true) {
            room.is_private = true;
        }
        // membersCount 是调用方维护的反规范化计数，原样接受非零值
        // membersCount is a caller-maintained denormalized count, non-zero
        // values are accepted as given
        if let Some(count) = patch.members_count.filter(|c| *c != 0) {
            room.members_count = count;
        }
        room.updated_at = Utc::now();

        if self.rooms.update(&room).await? == 0 {
            return Err(RoomsError::NotFound);
        }
        Ok(room)
    }

    /// 更换房间头像，需要 CHANGE_ROOM / Change the room photo, requires CHANGE_ROOM
    ///
    /// 上传失败时房间头像保持不变 / On upload failure the photo stays unchanged
    pub async fn change_room_photo(
        &self,
        claimed: &[Right],
        user_id: &str,
        room_id: &str,
        photo: &[u8],
    ) -> Result<Room, RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        if !self
            .verify_rights(claimed, user_id, room_id, Right::ChangeRoom)
            .await?
        {
            return Err(RoomsError::Unauthorized);
        }

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or(RoomsError::NotFound)?;

        let destination = format!("{}/{}/photo", self.defaults.media_folder, room.id);
        let url = self
            .media
            .upload(photo, &destination)
            .await
            .map_err(RoomsError::internal)?;

        room.photo = url;
        if self.rooms.update(&room).await? == 0 {
            return Err(RoomsError::NotFound);
        }
        Ok(room)
    }

    /// 删除房间，需要 DELETE_ROOM / Delete a room, requires DELETE_ROOM
    ///
    /// 只删除房间记录本身；关联的权限与通知记录不级联清理（已知孤儿）。
    /// Deletes only the room record; associated rights and notification
    /// records are not cascade-deleted (known orphaning).
    pub async fn delete_room(
        &self,
        claimed: &[Right],
        user_id: &str,
        room_id: &str,
    ) -> Result<(), RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        if !self
            .verify_rights(claimed, user_id, room_id, Right::DeleteRoom)
            .await?
        {
            return Err(RoomsError::Unauthorized);
        }

        let deleted = self.rooms.delete(room_id).await?;
        drop(_guard);
        self.forget_room_lock(room_id);

        if deleted == 0 {
            return Err(RoomsError::NotFound);
        }
        info!("房间已删除 / room deleted: {}", room_id);
        Ok(())
    }

    /// 邀请成员，需要 ADD_USERS / Invite a member, requires ADD_USERS
    ///
    /// 标识符形态决定唯一一种目标定位方式：含 `@` 按邮箱，否则含 `+`
    /// 按手机号，否则按用户名；定位失败返回 BadRequest。
    /// The identifier's shape selects exactly one lookup: `@` means email,
    /// else `+` means phone, else username; an unresolved target yields
    /// BadRequest.
    pub async fn add_user_to_room(
        &self,
        claimed: &[Right],
        user_id: &str,
        room_id: &str,
        identifier: &str,
        granted: Vec<Right>,
    ) -> Result<(), RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        if !self
            .verify_rights(claimed, user_id, room_id, Right::AddUsers)
            .await?
        {
            return Err(RoomsError::Unauthorized);
        }

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or_else(|| RoomsError::bad_request("room not found"))?;

        let target = match UserIdentifier::classify(identifier) {
            UserIdentifier::Email(email) => self.users.find_by_email(email).await?,
            UserIdentifier::Phone(phone) => self.users.find_by_phone(phone).await?,
            UserIdentifier::Username(username) => self.users.find_by_username(username).await?,
        }
        .ok_or_else(|| RoomsError::bad_request("user not found"))?;

        room.users_id.push(target.id.clone());
        self.rooms.update(&room).await?;
        self.rights
            .create(&Rights {
                user: target.id.clone(),
                room_id: room_id.to_string(),
                rights: granted,
            })
            .await?;

        info!(
            "成员已加入 / member added: room={} user={}",
            room_id, target.id
        );
        Ok(())
    }

    /// 自助进入公开房间，无授权检查 / Self-service entry into a public room, no
    /// authorization check
    ///
    /// 房间是否真的公开由调用方保证，本操作不校验 isPrivate（边界契约）。
    /// The caller guarantees the room is actually public, isPrivate is not
    /// checked here (boundary contract).
    pub async fn enter_public_room(&self, user_id: &str, room_id: &str) -> Result<(), RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or_else(|| RoomsError::bad_request("room not found"))?;

        room.users_id.push(user_id.to_string());
        self.rooms.update(&room).await?;
        self.rights
            .create(&Rights {
                user: user_id.to_string(),
                room_id: room_id.to_string(),
                rights: Right::PUBLIC_ENTRY.to_vec(),
            })
            .await?;
        Ok(())
    }

    /// 移除成员或自助退出 / Remove a member or self-exit
    ///
    /// LEAVE_ROOM 模式下最后一名成员退出时整间房被删除，空房间不落库。
    /// In LEAVE_ROOM mode the room itself is deleted when the last member
    /// leaves, an empty room never persists.
    pub async fn delete_user_from_room(
        &self,
        claimed: &[Right],
        user_id: &str,
        target_id: &str,
        room_id: &str,
        mode: DeleteMode,
    ) -> Result<RemovalOutcome, RoomsError> {
        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        let authorized = match mode {
            DeleteMode::DeleteUser => {
                self.verify_rights(claimed, user_id, room_id, Right::DeleteUsers)
                    .await?
            }
            DeleteMode::LeaveRoom => user_id == target_id,
        };
        if !authorized {
            return Err(RoomsError::Unauthorized);
        }

        let mut room = self
            .rooms
            .find(room_id)
            .await?
            .ok_or_else(|| RoomsError::bad_request("room not found"))?;

        // 先定位目标成员：非成员在任何模式下都是未找到
        // Resolve the target first: a non-member is NotFound in every mode
        let position = room
            .users_id
            .iter()
            .position(|id| id == target_id)
            .ok_or(RoomsError::NotFound)?;

        if mode == DeleteMode::LeaveRoom && room.users_id.len() == 1 {
            let deleted = self.rooms.delete(room_id).await?;
            drop(_guard);
            self.forget_room_lock(room_id);
            if deleted == 0 {
                return Err(RoomsError::NotFound);
            }
            info!("末位成员退出，房间删除 / last member left, room deleted: {}", room_id);
            return Ok(RemovalOutcome::RoomDeleted);
        }

        room.users_id.remove(position);
        self.rooms.update(&room).await?;
        Ok(RemovalOutcome::MemberRemoved)
    }
}
