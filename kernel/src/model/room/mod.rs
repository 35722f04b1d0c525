use chrono::{DateTime, Utc};

use crate::model::id::RoomId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: RoomId,
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
    pub host: RoomHost,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RoomHost {
    pub name: String,
    pub email: String,
}
