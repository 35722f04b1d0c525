mod auth;
mod booking;
mod health;
mod payment;
mod room;
mod stat;
mod user;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(auth::build_auth_routers())
        .merge(user::build_user_routers())
        .merge(room::build_room_routers())
        .merge(booking::build_booking_routers())
        .merge(payment::build_payment_routers())
        .merge(stat::build_stat_routers())
}
