use axum::{
    routing::{get, patch, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{show_user, show_user_list, update_user, upsert_user};

pub fn build_user_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/user", put(upsert_user))
        .route("/users", get(show_user_list))
        .route("/users/:email", get(show_user))
        .route("/user/update/:email", patch(update_user))
}
