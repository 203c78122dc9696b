use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 用户档案投影（账户分区，本服务只读）
/// User profile projection (accounts partition, read-only here)
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// 添加成员时的目标定位策略：按标识符形态选择唯一一种查找方式，
/// 不做回退链
/// Target resolution strategy when adding a member: the identifier's shape
/// selects exactly one lookup, no fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIdentifier<'a> {
    Email(&'a str),
    Phone(&'a str),
    Username(&'a str),
}

impl<'a> UserIdentifier<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if raw.contains('@') {
            UserIdentifier::Email(raw)
        } else if raw.contains('+') {
            UserIdentifier::Phone(raw)
        } else {
            UserIdentifier::Username(raw)
        }
    }
}
