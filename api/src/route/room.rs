use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::room::{
    delete_room, register_room, show_host_rooms, show_room, show_room_list, update_room,
    update_room_status,
};

pub fn build_room_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/rooms", get(show_room_list))
        .route("/rooms/:room_id", get(show_room))
        .route("/room", post(register_room))
        .route("/room/update/:room_id", put(update_room))
        .route("/room/status/:room_id", patch(update_room_status))
        .route("/room/:room_id", delete(delete_room))
        .route("/my-listings/:email", get(show_host_rooms))
}
