use chrono::{DateTime, Utc};
use kernel::model::{booking::Booking, stat::SalePoint};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: Uuid,
    pub room_id: Uuid,
    pub room_title: String,
    pub guest_name: String,
    pub guest_email: String,
    pub host_email: String,
    pub price: f64,
    pub booked_date: DateTime<Utc>,
    pub transaction_id: String,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            room_id,
            room_title,
            guest_name,
            guest_email,
            host_email,
            price,
            booked_date,
            transaction_id,
        } = value;
        Booking {
            booking_id: booking_id.into(),
            room_id: room_id.into(),
            room_title,
            guest_name,
            guest_email,
            host_email,
            price,
            date: booked_date,
            transaction_id,
        }
    }
}

/// 統計用の射影行。date と price 以外は読まない。
#[derive(sqlx::FromRow)]
pub struct SalePointRow {
    pub booked_date: DateTime<Utc>,
    pub price: f64,
}

impl From<SalePointRow> for SalePoint {
    fn from(value: SalePointRow) -> Self {
        SalePoint {
            date: value.booked_date,
            price: value.price,
        }
    }
}
