use chrono::{DateTime, Utc};
use kernel::model::room::{Room, RoomHost};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: Uuid,
    pub title: String,
    pub location: String,
    pub category: String,
    pub price: f64,
    pub guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub image: String,
    pub booked: bool,
    pub host_name: String,
    pub host_email: String,
    pub created_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            title,
            location,
            category,
            price,
            guests,
            bedrooms,
            bathrooms,
            description,
            image,
            booked,
            host_name,
            host_email,
            created_at,
        } = value;
        Room {
            room_id: room_id.into(),
            title,
            location,
            category,
            price,
            guests,
            bedrooms,
            bathrooms,
            description,
            image,
            booked,
            host: RoomHost {
                name: host_name,
                email: host_email,
            },
            created_at,
        }
    }
}
