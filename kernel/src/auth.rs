use serde::{Deserialize, Serialize};
use shared::error::AppResult;

/// セッショントークンに載せるクレーム。sub にはユーザーの email が入る。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// 署名付きセッショントークンの発行と検証。
pub trait TokenService: Send + Sync {
    fn issue(&self, email: &str) -> AppResult<String>;
    fn verify(&self, token: &str) -> AppResult<AccessClaims>;
}
