use chrono::{DateTime, Utc};

use crate::model::id::{BookingId, RoomId};

pub mod event;

/// 確定済みの予約。作成後は削除以外の変更を持たない。
#[derive(Debug, Clone)]
pub struct Booking {
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
