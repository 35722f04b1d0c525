use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kernel::model::role::Role;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::session;

/// 検証済みトークンから復元した呼び出し元の身元。
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
}

/// 認可の第一段階。Cookie のトークンを検証して Identity を取り出す。
/// トークンが無い・壊れている・期限切れの場合は 401 で打ち切る。
pub struct AuthenticatedUser(pub Identity);

/// 第二段階。認証済みの身元に対し、永続化されたロールを照合する。
/// ロール不一致は ForbiddenOperation（認証済みだが権限なし）になる。
pub struct HostUser(pub Identity);
pub struct AdminUser(pub Identity);

fn authenticate(parts: &Parts, registry: &AppRegistry) -> AppResult<Identity> {
    let token = session::session_token(&parts.headers).ok_or(AppError::UnauthenticatedError)?;
    let claims = registry.token_service().verify(&token)?;
    Ok(Identity { email: claims.sub })
}

async fn require_role(
    registry: &AppRegistry,
    identity: &Identity,
    role: Role,
) -> AppResult<()> {
    let user = registry
        .user_repository()
        .find_by_email(&identity.email)
        .await?;
    match user {
        Some(user) if user.role == role => Ok(()),
        _ => Err(AppError::ForbiddenOperation),
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, registry).map(Self)
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for HostUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let identity = authenticate(parts, registry)?;
        require_role(registry, &identity, Role::Host).await?;
        Ok(Self(identity))
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let identity = authenticate(parts, registry)?;
        require_role(registry, &identity, Role::Admin).await?;
        Ok(Self(identity))
    }
}
