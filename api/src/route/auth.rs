use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::auth::{create_token, logout};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/jwt", post(create_token))
        .route("/logout", get(logout))
}
