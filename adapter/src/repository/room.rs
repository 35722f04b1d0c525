use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, RoomListFilter, UpdateRoom, UpdateRoomStatus},
        Room,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::room::RoomRow, ConnectionPool};

const ROOM_COLUMNS: &str = r#"
    room_id, title, location, category, price, guests, bedrooms, bathrooms,
    description, image, booked, host_name, host_email, created_at
"#;

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<RoomId> {
        let room_id = RoomId::new();
        sqlx::query(
            r#"
                INSERT INTO rooms
                (room_id, title, location, category, price, guests, bedrooms,
                 bathrooms, description, image, host_name, host_email)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(room_id.raw())
        .bind(&event.title)
        .bind(&event.location)
        .bind(&event.category)
        .bind(event.price)
        .bind(event.guests)
        .bind(event.bedrooms)
        .bind(event.bathrooms)
        .bind(&event.description)
        .bind(&event.image)
        .bind(&event.host_name)
        .bind(&event.host_email)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(room_id)
    }

    async fn find_all(&self, filter: RoomListFilter) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = match filter.category {
            Some(category) => {
                sqlx::query_as(&format!(
                    r#"
                        SELECT {ROOM_COLUMNS}
                        FROM rooms
                        WHERE category = $1
                        ORDER BY created_at DESC
                    "#
                ))
                .bind(category)
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    r#"
                        SELECT {ROOM_COLUMNS}
                        FROM rooms
                        ORDER BY created_at DESC
                    "#
                ))
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(&format!(
            r#"
                SELECT {ROOM_COLUMNS}
                FROM rooms
                WHERE room_id = $1
            "#
        ))
        .bind(room_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Room::from))
    }

    async fn find_by_host(&self, host_email: &str) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = sqlx::query_as(&format!(
            r#"
                SELECT {ROOM_COLUMNS}
                FROM rooms
                WHERE host_email = $1
                ORDER BY created_at DESC
            "#
        ))
        .bind(host_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE rooms
                SET title = $2, location = $3, category = $4, price = $5,
                    guests = $6, bedrooms = $7, bathrooms = $8,
                    description = $9, image = $10, updated_at = CURRENT_TIMESTAMP
                WHERE room_id = $1
            "#,
        )
        .bind(event.room_id.raw())
        .bind(&event.title)
        .bind(&event.location)
        .bind(&event.category)
        .bind(event.price)
        .bind(event.guests)
        .bind(event.bedrooms)
        .bind(event.bathrooms)
        .bind(&event.description)
        .bind(&event.image)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "room ({}) not found",
                event.room_id
            )));
        }
        Ok(())
    }

    async fn update_status(&self, event: UpdateRoomStatus) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE rooms
                SET booked = $2, updated_at = CURRENT_TIMESTAMP
                WHERE room_id = $1
            "#,
        )
        .bind(event.room_id.raw())
        .bind(event.booked)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "room ({}) not found",
                event.room_id
            )));
        }
        Ok(())
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM rooms WHERE room_id = $1")
            .bind(room_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "room ({room_id}) not found"
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn count_by_host(&self, host_email: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE host_email = $1")
            .bind(host_email)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}
