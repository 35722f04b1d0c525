use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::gateway::mail::Email;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{UpdateUserRole, UpsertUser},
        User, UserStatus,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Guest,
    Host,
    Admin,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Guest => Self::Guest,
            Role::Host => Self::Host,
            Role::Admin => Self::Admin,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Guest => Self::Guest,
            RoleName::Host => Self::Host,
            RoleName::Admin => Self::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatusName {
    None,
    Requested,
}

impl From<UserStatus> for UserStatusName {
    fn from(value: UserStatus) -> Self {
        match value {
            UserStatus::None => Self::None,
            UserStatus::Requested => Self::Requested,
        }
    }
}

impl From<UserStatusName> for UserStatus {
    fn from(value: UserStatusName) -> Self {
        match value {
            UserStatusName::None => Self::None,
            UserStatusName::Requested => Self::Requested,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub role: Option<RoleName>,
    #[garde(skip)]
    pub status: Option<UserStatusName>,
}

impl From<UpsertUserRequest> for UpsertUser {
    fn from(value: UpsertUserRequest) -> Self {
        let UpsertUserRequest {
            name,
            email,
            role,
            status,
        } = value;
        UpsertUser {
            user_name: name,
            email,
            // 初回サインインは guest から始まる
            role: role.map(Role::from).unwrap_or(Role::Guest),
            status: status.map(UserStatus::from),
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
    #[garde(skip)]
    pub role: RoleName,
    #[garde(skip)]
    pub status: Option<UserStatusName>,
}

#[derive(new)]
pub struct UpdateUserRoleRequestWithEmail(String, UpdateUserRoleRequest);

impl From<UpdateUserRoleRequestWithEmail> for UpdateUserRole {
    fn from(value: UpdateUserRoleRequestWithEmail) -> Self {
        let UpdateUserRoleRequestWithEmail(email, UpdateUserRoleRequest { role, status }) = value;
        UpdateUserRole {
            email,
            role: role.into(),
            status: status.map(UserStatus::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: RoleName,
    pub status: UserStatusName,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
            status,
            created_at,
        } = value;
        Self {
            user_id,
            name: user_name,
            email,
            role: role.into(),
            status: status.into(),
            created_at,
        }
    }
}

pub fn welcome_email() -> Email {
    Email::new(
        "Welcome to StayHub!".to_string(),
        "Hope you will find your destination".to_string(),
    )
}
