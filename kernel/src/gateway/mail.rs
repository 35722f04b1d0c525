use async_trait::async_trait;
use derive_new::new;
use shared::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Email {
    pub subject: String,
    pub html: String,
}

/// 通知メールの送信口。ベストエフォートで、失敗は呼び出し側がログに落とす。
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, email: Email) -> AppResult<()>;
}
