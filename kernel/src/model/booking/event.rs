use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::RoomId;

#[derive(new)]
pub struct CreateBooking {
    pub room_id: RoomId,
    pub room_title: String,
    pub guest_name: String,
    pub guest_email: String,
    pub host_email: String,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub transaction_id: String,
}
