use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::user::UpsertOutcome;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AdminUser,
    model::user::{
        welcome_email, UpdateUserRoleRequest, UpdateUserRoleRequestWithEmail, UpsertUserRequest,
        UserResponse, UsersResponse,
    },
};

/// 初回サインイン時のユーザー登録。同じ email での再呼び出しは
/// 既存レコードをそのまま返す（冪等）。新規作成時だけウェルカム
/// メールを送り、送信失敗はログに落とすのみで応答へは波及させない。
pub async fn upsert_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<UpsertUserRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;

    let outcome = registry.user_repository().upsert(req.into()).await?;

    if let UpsertOutcome::Created(user) = &outcome {
        let mailer = registry.mailer();
        let to = user.email.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&to, welcome_email()).await {
                tracing::warn!(error = %e, recipient = %to, "failed to send welcome email");
            }
        });
    }

    Ok(Json(outcome.into_user().into()))
}

pub async fn show_user_list(
    _user: AdminUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn show_user(
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_email(&email)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound(format!("user ({email}) not found"))),
        })
}

pub async fn update_user(
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserRoleRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateUserRoleRequestWithEmail::new(email, req);
    registry
        .user_repository()
        .update_role(update.into())
        .await
        .map(|_| StatusCode::OK)
}
