use axum::{extract::State, Json};
use kernel::model::stat::SalesScope;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AdminUser, AuthenticatedUser, HostUser},
    model::stat::{chart_data, total_price, AdminStatResponse, GuestStatResponse, HostStatResponse},
};

pub async fn admin_stat(
    _user: AdminUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AdminStatResponse>> {
    let total_users = registry.user_repository().count().await?;
    let total_rooms = registry.room_repository().count().await?;
    let sales = registry
        .booking_repository()
        .find_sales(SalesScope::All)
        .await?;

    Ok(Json(AdminStatResponse {
        total_users,
        total_rooms,
        total_bookings: sales.len() as i64,
        total_price: total_price(&sales),
        chart_data: chart_data(&sales),
    }))
}

pub async fn host_stat(
    host: HostUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HostStatResponse>> {
    let email = host.0.email;
    let total_rooms = registry.room_repository().count_by_host(&email).await?;
    let sales = registry
        .booking_repository()
        .find_sales(SalesScope::Host(email.clone()))
        .await?;
    let host_since = registry
        .user_repository()
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("user ({email}) not found")))?
        .created_at;

    Ok(Json(HostStatResponse {
        total_rooms,
        total_bookings: sales.len() as i64,
        total_price: total_price(&sales),
        chart_data: chart_data(&sales),
        host_since,
    }))
}

pub async fn guest_stat(
    user: AuthenticatedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuestStatResponse>> {
    let email = user.0.email;
    let sales = registry
        .booking_repository()
        .find_sales(SalesScope::Guest(email.clone()))
        .await?;
    let guest_since = registry
        .user_repository()
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("user ({email}) not found")))?
        .created_at;

    Ok(Json(GuestStatResponse {
        total_bookings: sales.len() as i64,
        total_price: total_price(&sales),
        chart_data: chart_data(&sales),
        guest_since,
    }))
}
