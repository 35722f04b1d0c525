use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::{AuthenticatedUser, HostUser},
    model::booking::{
        booking_notifications, BookingResponse, BookingsResponse, CreateBookingRequest,
        CreateBookingRequestWithGuest,
    },
};

/// 予約の確定。レコードを永続化してから通知を非同期で発火する。
/// 通知の失敗は予約の成否に影響させず、警告ログだけ残す。
pub async fn create_booking(
    user: AuthenticatedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let create_booking = CreateBookingRequestWithGuest::new(user.0.email, req);
    let booking = registry
        .booking_repository()
        .create(create_booking.into())
        .await?;

    let mailer = registry.mailer();
    let notifications = booking_notifications(&booking);
    tokio::spawn(async move {
        for (to, email) in notifications {
            if let Err(e) = mailer.send(&to, email).await {
                tracing::warn!(error = %e, recipient = %to, "failed to send booking notification");
            }
        }
    });

    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_guest_bookings(
    _user: AuthenticatedUser,
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_guest(&email)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_host_bookings(
    _host: HostUser,
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_host(&email)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn delete_booking(
    _user: AuthenticatedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .booking_repository()
        .delete(booking_id)
        .await
        .map(|_| StatusCode::OK)
}
