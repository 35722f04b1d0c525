use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::stat::{admin_stat, guest_stat, host_stat};

pub fn build_stat_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/admin-stat", get(admin_stat))
        .route("/host-stat", get(host_stat))
        .route("/guest-stat", get(guest_stat))
}
