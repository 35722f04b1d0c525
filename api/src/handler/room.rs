use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::RoomId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::HostUser,
    model::room::{
        CreateRoomRequest, CreateRoomRequestWithHost, RoomListQuery, RoomResponse, RoomsResponse,
        UpdateRoomRequest, UpdateRoomRequestWithId, UpdateRoomStatusRequest,
        UpdateRoomStatusRequestWithId,
    },
};

pub async fn register_room(
    host: HostUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let create_room = CreateRoomRequestWithHost::new(host.0.email, req);
    registry
        .room_repository()
        .create(create_room.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_room_list(
    Query(query): Query<RoomListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_all(query.into())
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound(format!(
                "room ({room_id}) not found"
            ))),
        })
}

pub async fn show_host_rooms(
    _host: HostUser,
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_by_host(&email)
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn update_room(
    _host: HostUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_room = UpdateRoomRequestWithId::new(room_id, req);
    registry
        .room_repository()
        .update(update_room.into())
        .await
        .map(|_| StatusCode::OK)
}

/// 空室フラグの切り替え。予約作成処理とはアトミックに連動しないため、
/// 呼び出し側が予約後に明示的に叩く。
pub async fn update_room_status(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomStatusRequest>,
) -> AppResult<StatusCode> {
    let update_status = UpdateRoomStatusRequestWithId::new(room_id, req);
    registry
        .room_repository()
        .update_status(update_status.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_room(
    _host: HostUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .room_repository()
        .delete(room_id)
        .await
        .map(|_| StatusCode::OK)
}
