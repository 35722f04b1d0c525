use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{UpdateUserRole, UpsertUser},
        UpsertOutcome, User, UserStatus,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::user::{status_column, UserRow},
    ConnectionPool,
};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn upsert(&self, event: UpsertUser) -> AppResult<UpsertOutcome> {
        // email をキーに既存レコードを調べ、分岐ごとの結果を呼び出し側へ返す。
        // - 既存 + ホスト申請 → status のみ更新
        // - 既存（それ以外）→ 何も書かずそのまま返す（冪等）
        // - 新規 → INSERT
        if let Some(user) = self.find_by_email(&event.email).await? {
            return match event.status {
                Some(UserStatus::Requested) if user.status != UserStatus::Requested => {
                    sqlx::query(
                        r#"
                            UPDATE users
                            SET status = $2, updated_at = CURRENT_TIMESTAMP
                            WHERE email = $1
                        "#,
                    )
                    .bind(&event.email)
                    .bind(status_column(UserStatus::Requested))
                    .execute(self.db.inner_ref())
                    .await
                    .map_err(AppError::SpecificOperationError)?;

                    Ok(UpsertOutcome::StatusUpdated(User {
                        status: UserStatus::Requested,
                        ..user
                    }))
                }
                _ => Ok(UpsertOutcome::Unchanged(user)),
            };
        }

        let user_id = UserId::new();
        sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, role, status)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id.raw())
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(event.role.as_ref())
        .bind(event.status.and_then(status_column))
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // created_at は DB 側で採番されるため登録後に読み直す
        let created = self.find_by_email(&event.email).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("no user record has been created".into())
        })?;
        Ok(UpsertOutcome::Created(created))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, status, created_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, status, created_at
                FROM users
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET role = $2, status = $3, updated_at = CURRENT_TIMESTAMP
                WHERE email = $1
            "#,
        )
        .bind(&event.email)
        .bind(event.role.as_ref())
        .bind(event.status.and_then(status_column))
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user ({}) not found",
                event.email
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}
