use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use kernel::auth::{AccessClaims, TokenService};
use shared::{config::AuthConfig, error::{AppError, AppResult}};

/// 共有シークレットで署名する HS256 のセッショントークン。
/// 既定の有効期限は 365 日（ログイン保持モデル）で、設定から変更できる。
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(cfg.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(cfg.token_secret.as_bytes()),
            ttl: Duration::days(cfg.token_ttl_days),
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenCreationError(e.to_string()))
    }

    fn verify(&self, token: &str) -> AppResult<AccessClaims> {
        // 署名不正・期限切れ・不正な形式はすべて認証エラーに落とす
        decode::<AccessClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::UnauthenticatedError)
    }
}
