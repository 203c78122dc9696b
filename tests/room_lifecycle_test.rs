//! 房间生命周期与授权行为的端到端测试（内存存储 + 假媒体托管）
//! End-to-end tests of room lifecycle and authorization behavior
//! (memory stores + fake media host)

use std::sync::Arc;

use async_trait::async_trait;

use chatterly_rooms::config::RoomsDefaults;
use chatterly_rooms::domain::{Message, MessageAuthor, Right, Room, RoomPatch, RoomSpec, UserProfile};
use chatterly_rooms::error::RoomsError;
use chatterly_rooms::media::MediaHost;
use chatterly_rooms::service::{DeleteMode, RemovalOutcome, RoomsService};
use chatterly_rooms::storage::memory::{
    MemoryMessageStore, MemoryNotificationStore, MemoryRightsStore, MemoryRoomStore,
    MemoryUserStore,
};
use chatterly_rooms::storage::{NotificationStore, RightsStore, RoomStore};

/// 不出网的媒体托管替身 / Media host stand-in that never leaves the process
struct FakeMediaHost;

#[async_trait]
impl MediaHost for FakeMediaHost {
    async fn upload(&self, _bytes: &[u8], destination: &str) -> anyhow::Result<String> {
        Ok(format!("https://media.test/{}", destination))
    }
}

struct Harness {
    rooms: Arc<MemoryRoomStore>,
    rights: Arc<MemoryRightsStore>,
    notifications: Arc<MemoryNotificationStore>,
    messages: Arc<MemoryMessageStore>,
    users: Arc<MemoryUserStore>,
    service: RoomsService,
}

fn harness() -> Harness {
    let rooms = Arc::new(MemoryRoomStore::new());
    let rights = Arc::new(MemoryRightsStore::new());
    let notifications = Arc::new(MemoryNotificationStore::new());
    let messages = Arc::new(MemoryMessageStore::new());
    let users = Arc::new(MemoryUserStore::new());
    let service = RoomsService::new(
        rooms.clone(),
        rights.clone(),
        notifications.clone(),
        messages.clone(),
        users.clone(),
        Arc::new(FakeMediaHost),
        RoomsDefaults::default(),
    );
    Harness {
        rooms,
        rights,
        notifications,
        messages,
        users,
        service,
    }
}

fn spec(name: &str) -> RoomSpec {
    RoomSpec {
        name: name.to_string(),
        description: None,
        is_user: false,
        is_private: false,
        members_count: None,
    }
}

fn profile(id: &str, username: &str, email: &str, phone: Option<&str>) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        phone_number: phone.map(str::to_string),
        first_name: None,
        last_name: None,
        birthday: None,
        photo: None,
    }
}

#[tokio::test]
async fn create_room_grants_full_rights_and_enables_notifications() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    assert_eq!(room.users_id, vec!["u1".to_string()]);
    assert_eq!(room.members_count, 1);
    assert_eq!(room.photo, "https://via.placeholder.com/60");
    assert_eq!(room.recent_message.text, "loading...");
    assert_eq!(room.recent_message.user.username, "Loading...");

    let stored = h.rights.find("u1", &room.id).await.unwrap().unwrap();
    assert_eq!(stored.rights, Right::ALL.to_vec());

    let settings = h.notifications.find("u1", &room.id).await.unwrap().unwrap();
    assert!(settings.notifications);
}

#[tokio::test]
async fn welcome_chat_is_deterministic_and_never_mutates_the_template() {
    let h = harness();
    // 模板房间由运维种入 / The template room is seeded operationally
    let template = h.service.create_room("ops", spec("Chatterly")).await.unwrap();

    let first = h.service.add_welcome_chat("u1").await.unwrap();
    let second = h.service.add_welcome_chat("u1").await.unwrap();
    let other = h.service.add_welcome_chat("u2").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_ne!(first.id, other.id);
    assert_ne!(first.id, template.id);
    assert_eq!(first.users_id, vec!["u1".to_string()]);

    let untouched = h.rooms.find(&template.id).await.unwrap().unwrap();
    assert_eq!(untouched.users_id, vec!["ops".to_string()]);

    let granted = h.rights.find("u1", &first.id).await.unwrap().unwrap();
    assert_eq!(granted.rights, Right::WELCOME.to_vec());
}

#[tokio::test]
async fn welcome_chat_without_template_is_an_internal_fault() {
    let h = harness();
    let err = h.service.add_welcome_chat("u1").await.unwrap_err();
    assert!(matches!(err, RoomsError::Internal(_)));
}

#[tokio::test]
async fn update_room_ignores_falsy_patch_fields() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    let patch = RoomPatch {
        name: Some(String::new()),
        description: None,
        is_private: Some(false),
        members_count: Some(0),
    };
    let updated = h
        .service
        .update_room(&Right::ALL, "u1", &room.id, patch)
        .await
        .unwrap();

    assert_eq!(updated.name, "general");
    assert!(!updated.is_private);
    assert_eq!(updated.members_count, 1);
    assert!(updated.updated_at >= room.updated_at);

    let renamed = h
        .service
        .update_room(
            &Right::ALL,
            "u1",
            &room.id,
            RoomPatch {
                name: Some("lounge".to_string()),
                is_private: Some(true),
                ..RoomPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "lounge");
    assert!(renamed.is_private);
}

#[tokio::test]
async fn update_room_requires_change_room_in_both_claim_and_store() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    // 声明缺少标志 / Claim lacks the flag
    let err = h
        .service
        .update_room(&Right::PUBLIC_ENTRY, "u1", &room.id, RoomPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::Unauthorized));

    // 声明含标志但存储无记录 / Claim carries it but no stored record
    let err = h
        .service
        .update_room(&Right::ALL, "stranger", &room.id, RoomPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::Unauthorized));
}

#[tokio::test]
async fn change_room_photo_returns_the_updated_room() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    let updated = h
        .service
        .change_room_photo(&Right::ALL, "u1", &room.id, b"jpeg-bytes")
        .await
        .unwrap();

    assert_eq!(
        updated.photo,
        format!("https://media.test/Chatterly/{}/photo", room.id)
    );
    let stored = h.rooms.find(&room.id).await.unwrap().unwrap();
    assert_eq!(stored.photo, updated.photo);
}

#[tokio::test]
async fn identifier_shape_picks_exactly_one_lookup() {
    let h = harness();
    h.users.insert(profile("u2", "bob", "bob@mail.test", None));
    h.users.insert(profile("u3", "carol", "carol@mail.test", Some("+15550123")));
    h.users.insert(profile("u4", "a+b", "weird@mail.test", None));

    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    h.service
        .add_user_to_room(&Right::ALL, "u1", &room.id, "bob@mail.test", vec![Right::SendMessages])
        .await
        .unwrap();
    h.service
        .add_user_to_room(&Right::ALL, "u1", &room.id, "+15550123", vec![Right::SendMessages])
        .await
        .unwrap();

    let stored = h.rooms.find(&room.id).await.unwrap().unwrap();
    assert_eq!(stored.users_id, vec!["u1", "u2", "u3"]);

    // 含 '+' 但无 '@' 的用户名不会按用户名查找，也没有回退链
    // A '+' without '@' routes to phone lookup, there is no fallback chain
    let err = h
        .service
        .add_user_to_room(&Right::ALL, "u1", &room.id, "a+b", vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::BadRequest { .. }));
}

#[tokio::test]
async fn public_entry_grants_the_baseline_set() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    h.service.enter_public_room("u2", &room.id).await.unwrap();

    let stored = h.rights.find("u2", &room.id).await.unwrap().unwrap();
    assert_eq!(stored.rights, Right::PUBLIC_ENTRY.to_vec());
    let members = h.rooms.find(&room.id).await.unwrap().unwrap().users_id;
    assert_eq!(members, vec!["u1", "u2"]);
}

#[tokio::test]
async fn last_member_leave_deletes_the_whole_room() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    let outcome = h
        .service
        .delete_user_from_room(&[], "u1", "u1", &room.id, DeleteMode::LeaveRoom)
        .await
        .unwrap();

    assert_eq!(outcome, RemovalOutcome::RoomDeleted);
    assert!(h.rooms.find(&room.id).await.unwrap().is_none());
}

#[tokio::test]
async fn nonmember_self_leave_cannot_delete_a_single_member_room() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    // 非成员以自己为目标退出：未找到，房间原样保留
    // A non-member naming themselves as target: NotFound, the room survives
    let err = h
        .service
        .delete_user_from_room(&[], "u2", "u2", &room.id, DeleteMode::LeaveRoom)
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::NotFound));

    let stored = h.rooms.find(&room.id).await.unwrap().unwrap();
    assert_eq!(stored.users_id, vec!["u1"]);
}

#[tokio::test]
async fn leave_room_only_authorizes_the_member_itself() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();
    h.service.enter_public_room("u2", &room.id).await.unwrap();

    let err = h
        .service
        .delete_user_from_room(&Right::ALL, "u1", "u2", &room.id, DeleteMode::LeaveRoom)
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::Unauthorized));

    let outcome = h
        .service
        .delete_user_from_room(&[], "u2", "u2", &room.id, DeleteMode::LeaveRoom)
        .await
        .unwrap();
    assert_eq!(outcome, RemovalOutcome::MemberRemoved);
    let members = h.rooms.find(&room.id).await.unwrap().unwrap().users_id;
    assert_eq!(members, vec!["u1"]);
}

#[tokio::test]
async fn admin_removal_requires_delete_users() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();
    h.service.enter_public_room("u2", &room.id).await.unwrap();

    // 公开进入的基础集不含 DELETE_USERS / The baseline set lacks DELETE_USERS
    let err = h
        .service
        .delete_user_from_room(
            &Right::PUBLIC_ENTRY,
            "u2",
            "u1",
            &room.id,
            DeleteMode::DeleteUser,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::Unauthorized));

    let outcome = h
        .service
        .delete_user_from_room(&Right::ALL, "u1", "u2", &room.id, DeleteMode::DeleteUser)
        .await
        .unwrap();
    assert_eq!(outcome, RemovalOutcome::MemberRemoved);
}

#[tokio::test]
async fn rights_change_is_wholesale_and_gated() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();
    h.service.enter_public_room("u2", &room.id).await.unwrap();

    let err = h
        .service
        .change_user_rights_in_room(
            &Right::PUBLIC_ENTRY,
            "u2",
            "u1",
            &room.id,
            vec![Right::SendMessages],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::Unauthorized));
    // 未授权时目标权限原样保留 / The target set stays intact when unauthorized
    let creator = h.rights.find("u1", &room.id).await.unwrap().unwrap();
    assert_eq!(creator.rights, Right::ALL.to_vec());

    h.service
        .change_user_rights_in_room(
            &Right::ALL,
            "u1",
            "u2",
            &room.id,
            vec![Right::SendMessages, Right::DeleteMessages],
        )
        .await
        .unwrap();
    let replaced = h.rights.find("u2", &room.id).await.unwrap().unwrap();
    assert_eq!(
        replaced.rights,
        vec![Right::SendMessages, Right::DeleteMessages]
    );

    // 目标无存量记录 / Target without a stored record
    let err = h
        .service
        .change_user_rights_in_room(&Right::ALL, "u1", "ghost", &room.id, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::BadRequest { .. }));
}

#[tokio::test]
async fn gate_needs_both_claim_and_stored_record() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    assert!(!h
        .service
        .verify_rights(&[], "u1", &room.id, Right::ChangeRoom)
        .await
        .unwrap());
    assert!(!h
        .service
        .verify_rights(&Right::ALL, "nobody", &room.id, Right::ChangeRoom)
        .await
        .unwrap());
    assert!(h
        .service
        .verify_rights(&Right::ALL, "u1", &room.id, Right::ChangeRoom)
        .await
        .unwrap());
}

#[tokio::test]
async fn notification_toggle_on_missing_record_is_not_found() {
    let h = harness();
    let err = h
        .service
        .change_notification_settings("u1", "nowhere", false)
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::NotFound));

    let room = h.service.create_room("u1", spec("general")).await.unwrap();
    h.service
        .change_notification_settings("u1", &room.id, false)
        .await
        .unwrap();

    let all = h.service.get_user_notifications_settings("u1").await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].notifications);
}

#[tokio::test]
async fn message_references_round_trip_on_the_room() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    h.service.add_message_reference(&room.id, "m1").await.unwrap();
    h.service.add_message_reference(&room.id, "m2").await.unwrap();
    let stored = h.rooms.find(&room.id).await.unwrap().unwrap();
    assert_eq!(stored.messages_id, vec!["m1", "m2"]);

    h.service.delete_message_reference(&room.id, "m1").await.unwrap();
    let stored = h.rooms.find(&room.id).await.unwrap().unwrap();
    assert_eq!(stored.messages_id, vec!["m2"]);

    let err = h
        .service
        .delete_message_reference(&room.id, "m1")
        .await
        .unwrap_err();
    assert!(matches!(err, RoomsError::NotFound));
}

#[tokio::test]
async fn projector_overwrites_the_cached_snapshot() {
    let h = harness();
    let room = h.service.create_room("u1", spec("general")).await.unwrap();

    // 无消息的房间拒绝刷新 / A room without messages refuses the refresh
    let err = h.service.refresh_recent_message(&room.id).await.unwrap_err();
    assert!(matches!(err, RoomsError::BadRequest { .. }));

    h.messages.push(Message {
        id: "m1".to_string(),
        room_id: room.id.clone(),
        user: MessageAuthor {
            id: "u1".to_string(),
            username: "alice".to_string(),
        },
        text: "hello".to_string(),
        attachment: vec![],
        timestamp: "1700000000".to_string(),
    });
    h.messages.push(Message {
        id: "m2".to_string(),
        room_id: room.id.clone(),
        user: MessageAuthor {
            id: "u1".to_string(),
            username: "alice".to_string(),
        },
        text: "latest".to_string(),
        attachment: vec![],
        timestamp: "1700000100".to_string(),
    });

    let recent = h.service.refresh_recent_message(&room.id).await.unwrap();
    assert_eq!(recent.id, "m2");
    assert_eq!(recent.text, "latest");

    let stored: Room = h.rooms.find(&room.id).await.unwrap().unwrap();
    assert_eq!(stored.recent_message, recent);
}

#[tokio::test]
async fn search_unions_public_rooms_users_and_own_rooms() {
    let h = harness();
    h.users.insert(profile("u9", "general-bob", "gb@mail.test", None));

    let public = h.service.create_room("u1", spec("General Talk")).await.unwrap();
    let private = h
        .service
        .create_room(
            "u1",
            RoomSpec {
                name: "general secrets".to_string(),
                description: None,
                is_user: false,
                is_private: true,
                members_count: None,
            },
        )
        .await
        .unwrap();
    // 他人的私有房间不可见 / Someone else's private room stays invisible
    h.service
        .create_room(
            "u2",
            RoomSpec {
                name: "general hidden".to_string(),
                description: None,
                is_user: false,
                is_private: true,
                members_count: None,
            },
        )
        .await
        .unwrap();

    let hits = h
        .service
        .find_room_and_users_by_name("general", "u1")
        .await
        .unwrap();
    assert_eq!(hits.len(), 3);

    let user_rooms = h.service.get_all_user_rooms("u1").await.unwrap();
    let mut ids: Vec<&str> = user_rooms.iter().map(|v| v.room.id.as_str()).collect();
    ids.sort();
    let mut expected = vec![public.id.as_str(), private.id.as_str()];
    expected.sort();
    assert_eq!(ids, expected);
}
