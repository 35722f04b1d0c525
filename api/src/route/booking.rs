use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    create_booking, delete_booking, show_guest_bookings, show_host_bookings,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/booking", post(create_booking))
        .route("/booking/:booking_id", delete(delete_booking))
        .route("/my-bookings/:email", get(show_guest_bookings))
        .route("/manage-bookings/:email", get(show_host_bookings))
}
