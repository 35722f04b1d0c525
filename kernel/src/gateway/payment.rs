use async_trait::async_trait;
use shared::error::AppResult;

/// 決済ゲートウェイが返す、クライアント側で決済を完了させるための秘密値。
/// ゲートウェイ内部の情報はこれ以外公開しない。
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// amount は最小通貨単位（セント）。1 未満の値を渡してはならない。
    async fn create_payment_intent(&self, amount: i64, currency: &str)
        -> AppResult<PaymentIntent>;
}
