use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, RoomListFilter, UpdateRoom, UpdateRoomStatus},
        Room,
    },
};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<RoomId>;
    async fn find_all(&self, filter: RoomListFilter) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    async fn find_by_host(&self, host_email: &str) -> AppResult<Vec<Room>>;
    async fn update(&self, event: UpdateRoom) -> AppResult<()>;
    // 空室フラグの切り替え。予約作成とはアトミックに連動しない
    async fn update_status(&self, event: UpdateRoomStatus) -> AppResult<()>;
    async fn delete(&self, room_id: RoomId) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
    async fn count_by_host(&self, host_email: &str) -> AppResult<i64>;
}
