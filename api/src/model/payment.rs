use kernel::gateway::payment::PaymentIntent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub price: f64,
}

impl CreatePaymentIntentRequest {
    /// 主要通貨単位の金額を最小単位（セント）へ換算する。
    /// 1 セント未満になる金額はゲートウェイを呼んではならないので None。
    pub fn amount_in_cents(&self) -> Option<i64> {
        let cents = (self.price * 100.0).round() as i64;
        (cents >= 1).then_some(cents)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

impl From<PaymentIntent> for PaymentIntentResponse {
    fn from(value: PaymentIntent) -> Self {
        Self {
            client_secret: value.client_secret,
        }
    }
}
