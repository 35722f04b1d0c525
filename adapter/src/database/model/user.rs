use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    role::Role,
    user::{User, UserStatus},
};
use shared::error::AppError;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: Uuid,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
            status,
            created_at,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        // status 列は NULL が「申請なし」を意味する
        let status = match status {
            None => UserStatus::None,
            Some(s) => UserStatus::from_str(&s)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
        };
        Ok(User {
            user_id: user_id.into(),
            user_name,
            email,
            role,
            status,
            created_at,
        })
    }
}

/// UserStatus を status 列の値へ戻す。
pub fn status_column(status: UserStatus) -> Option<&'static str> {
    match status {
        UserStatus::None => None,
        UserStatus::Requested => Some("Requested"),
    }
}
