use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::payment::create_payment_intent;

pub fn build_payment_routers() -> Router<AppRegistry> {
    Router::new().route("/create-payment-intent", post(create_payment_intent))
}
