use crate::model::id::RoomId;

pub struct CreateRoom {
    pub title: String,
    pub location: String,
    pub category: String,
    pub price: f64,
    pub guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub image: String,
    pub host_name: String,
    pub host_email: String,
}

#[derive(Debug)]
pub struct UpdateRoom {
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
}

#[derive(Debug)]
pub struct UpdateRoomStatus {
    pub room_id: RoomId,
    pub booked: bool,
}

#[derive(Debug, Default)]
pub struct RoomListFilter {
    pub category: Option<String>,
}
