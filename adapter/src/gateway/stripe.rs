use async_trait::async_trait;
use kernel::gateway::payment::{PaymentGateway, PaymentIntent};
use serde::Deserialize;
use shared::{
    config::PaymentConfig,
    error::{AppError, AppResult},
};

/// Stripe の Payment Intents API クライアント。
/// 呼び出し側へは client_secret だけを返す。
pub struct StripeGateway {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeGateway {
    pub fn new(cfg: &PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: cfg.secret_key.clone(),
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct CreatePaymentIntentResponse {
    client_secret: String,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> AppResult<PaymentIntent> {
        let res = self
            .http
            .post(format!("{}/v1/payment_intents", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&payment_intent_params(amount, currency))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("payment gateway request failed: {e}"))
            })?;

        if !res.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "payment gateway returned {}",
                res.status()
            )));
        }

        let body: CreatePaymentIntentResponse = res.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("payment gateway response was malformed: {e}"))
        })?;

        Ok(PaymentIntent {
            client_secret: body.client_secret,
        })
    }
}

fn payment_intent_params(amount: i64, currency: &str) -> Vec<(&'static str, String)> {
    vec![
        ("amount", amount.to_string()),
        ("currency", currency.to_string()),
        // 利用可能な決済手段はゲートウェイ側の設定に任せる
        ("automatic_payment_methods[enabled]", "true".to_string()),
    ]
}
