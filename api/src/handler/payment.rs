use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthenticatedUser,
    model::payment::{CreatePaymentIntentRequest, PaymentIntentResponse},
};

/// 決済インテントの発行。最小通貨単位に満たない金額は
/// ゲートウェイを呼ばずに 422 で弾く。
pub async fn create_payment_intent(
    _user: AuthenticatedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let amount = req.amount_in_cents().ok_or_else(|| {
        AppError::UnprocessableEntity(format!("price ({}) is below the minimum amount", req.price))
    })?;

    let currency = registry.app_config().payment.currency.clone();
    registry
        .payment_gateway()
        .create_payment_intent(amount, &currency)
        .await
        .map(PaymentIntentResponse::from)
        .map(Json)
}
