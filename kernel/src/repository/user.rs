use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::user::{
    event::{UpdateUserRole, UpsertUser},
    UpsertOutcome, User,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // 初回サインイン時のユーザー登録。email をキーに冪等に動く
    async fn upsert(&self, event: UpsertUser) -> AppResult<UpsertOutcome>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    // ロール変更は管理者操作経由のみ
    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
}
