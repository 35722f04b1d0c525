use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::gateway::mail::Email;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, RoomId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(length(min = 1))]
    pub room_title: String,
    #[garde(length(min = 1))]
    pub guest_name: String,
    #[garde(email)]
    pub host_email: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(skip)]
    pub date: DateTime<Utc>,
    #[garde(length(min = 1))]
    pub transaction_id: String,
}

/// ゲストの email はリクエスト本文ではなく検証済みの身元から取る。
#[derive(new)]
pub struct CreateBookingRequestWithGuest(String, CreateBookingRequest);

impl From<CreateBookingRequestWithGuest> for CreateBooking {
    fn from(value: CreateBookingRequestWithGuest) -> Self {
        let CreateBookingRequestWithGuest(
            guest_email,
            CreateBookingRequest {
                room_id,
                room_title,
                guest_name,
                host_email,
                price,
                date,
                transaction_id,
            },
        ) = value;
        CreateBooking {
            room_id,
            room_title,
            guest_name,
            guest_email,
            host_email,
            price,
            date,
            transaction_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub room_title: String,
    pub guest_name: String,
    pub guest_email: String,
    pub host_email: String,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub transaction_id: String,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            room_id,
            room_title,
            guest_name,
            guest_email,
            host_email,
            price,
            date,
            transaction_id,
        } = value;
        Self {
            booking_id,
            room_id,
            room_title,
            guest_name,
            guest_email,
            host_email,
            price,
            date,
            transaction_id,
        }
    }
}

/// 永続化成功後に発火させるコミット後通知の一覧。
/// ゲストへの確定通知とホストへの予約通知を返す。
pub fn booking_notifications(booking: &Booking) -> Vec<(String, Email)> {
    vec![
        (
            booking.guest_email.clone(),
            Email::new(
                "Booking Successful!".to_string(),
                format!(
                    "You've successfully booked a room through StayHub. \
                     Transaction Id: {}",
                    booking.transaction_id
                ),
            ),
        ),
        (
            booking.host_email.clone(),
            Email::new(
                "Your room got booked!".to_string(),
                format!("Get ready to welcome {}.", booking.guest_name),
            ),
        ),
    ]
}
