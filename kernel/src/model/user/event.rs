use crate::model::{role::Role, user::UserStatus};

pub struct UpsertUser {
    pub user_name: String,
    pub email: String,
    pub role: Role,
    pub status: Option<UserStatus>,
}

#[derive(Debug)]
pub struct UpdateUserRole {
    pub email: String,
    pub role: Role,
    pub status: Option<UserStatus>,
}
