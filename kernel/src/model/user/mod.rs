use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

use crate::model::{id::UserId, role::Role};

pub mod event;

/// ホスト申請の状態。申請中のゲストだけが `Requested` を持つ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, EnumString)]
pub enum UserStatus {
    #[default]
    None,
    Requested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

/// `/user` の upsert がどの分岐を通ったかを呼び出し側へ伝える。
/// ウェルカムメールは `Created` のときだけ送る。
#[derive(Debug)]
pub enum UpsertOutcome {
    Created(User),
    StatusUpdated(User),
    Unchanged(User),
}

impl UpsertOutcome {
    pub fn into_user(self) -> User {
        match self {
            UpsertOutcome::Created(user)
            | UpsertOutcome::StatusUpdated(user)
            | UpsertOutcome::Unchanged(user) => user,
        }
    }
}
