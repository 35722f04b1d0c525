use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, RoomListFilter, UpdateRoom, UpdateRoomStatus},
        Room, RoomHost,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(length(min = 1))]
    pub category: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(range(min = 1))]
    pub guests: i32,
    #[garde(range(min = 0))]
    pub bedrooms: i32,
    #[garde(range(min = 0))]
    pub bathrooms: i32,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub image: String,
    #[garde(length(min = 1))]
    pub host_name: String,
}

/// ホストの email は検証済みトークンの身元から補う。
#[derive(new)]
pub struct CreateRoomRequestWithHost(String, CreateRoomRequest);

impl From<CreateRoomRequestWithHost> for CreateRoom {
    fn from(value: CreateRoomRequestWithHost) -> Self {
        let CreateRoomRequestWithHost(
            host_email,
            CreateRoomRequest {
                title,
                location,
                category,
                price,
                guests,
                bedrooms,
                bathrooms,
                description,
                image,
                host_name,
            },
        ) = value;
        CreateRoom {
            title,
            location,
            category,
            price,
            guests,
            bedrooms,
            bathrooms,
            description,
            image,
            host_name,
            host_email,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(length(min = 1))]
    pub category: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(range(min = 1))]
    pub guests: i32,
    #[garde(range(min = 0))]
    pub bedrooms: i32,
    #[garde(range(min = 0))]
    pub bathrooms: i32,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub image: String,
}

#[derive(new)]
pub struct UpdateRoomRequestWithId(RoomId, UpdateRoomRequest);

impl From<UpdateRoomRequestWithId> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithId) -> Self {
        let UpdateRoomRequestWithId(
            room_id,
            UpdateRoomRequest {
                title,
                location,
                category,
                price,
                guests,
                bedrooms,
                bathrooms,
                description,
                image,
            },
        ) = value;
        UpdateRoom {
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
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomStatusRequest {
    pub status: bool,
}

#[derive(new)]
pub struct UpdateRoomStatusRequestWithId(RoomId, UpdateRoomStatusRequest);

impl From<UpdateRoomStatusRequestWithId> for UpdateRoomStatus {
    fn from(value: UpdateRoomStatusRequestWithId) -> Self {
        let UpdateRoomStatusRequestWithId(room_id, UpdateRoomStatusRequest { status }) = value;
        UpdateRoomStatus {
            room_id,
            booked: status,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListQuery {
    pub category: Option<String>,
}

impl From<RoomListQuery> for RoomListFilter {
    fn from(value: RoomListQuery) -> Self {
        // category=null はフィルタなしとして扱う（クライアント互換）
        let category = value
            .category
            .filter(|c| !c.is_empty() && c != "null");
        RoomListFilter { category }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomHostResponse {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
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
    pub host: RoomHostResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
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
            host: RoomHost { name, email },
            created_at,
        } = value;
        Self {
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
            host: RoomHostResponse { name, email },
            created_at,
        }
    }
}
