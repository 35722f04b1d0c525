use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::BookingId,
    stat::{SalePoint, SalesScope},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::booking::{BookingRow, SalePointRow},
    ConnectionPool,
};

const BOOKING_COLUMNS: &str = r#"
    booking_id, room_id, room_title, guest_name, guest_email, host_email,
    price, booked_date, transaction_id
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, room_id, room_title, guest_name, guest_email,
                 host_email, price, booked_date, transaction_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking_id.raw())
        .bind(event.room_id.raw())
        .bind(&event.room_title)
        .bind(&event.guest_name)
        .bind(&event.guest_email)
        .bind(&event.host_email)
        .bind(event.price)
        .bind(event.date)
        .bind(&event.transaction_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        Ok(Booking {
            booking_id,
            room_id: event.room_id,
            room_title: event.room_title,
            guest_name: event.guest_name,
            guest_email: event.guest_email,
            host_email: event.host_email,
            price: event.price,
            date: event.date,
            transaction_id: event.transaction_id,
        })
    }

    async fn find_by_guest(&self, guest_email: &str) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings
                WHERE guest_email = $1
                ORDER BY created_at
            "#
        ))
        .bind(guest_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_host(&self, host_email: &str) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings
                WHERE host_email = $1
                ORDER BY created_at
            "#
        ))
        .bind(host_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn delete(&self, booking_id: BookingId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(booking_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "booking ({booking_id}) not found"
            )));
        }
        Ok(())
    }

    // チャートは登録順で並ぶ想定のため created_at で揃える
    async fn find_sales(&self, scope: SalesScope) -> AppResult<Vec<SalePoint>> {
        let rows: Vec<SalePointRow> = match scope {
            SalesScope::All => {
                sqlx::query_as(
                    r#"
                        SELECT booked_date, price
                        FROM bookings
                        ORDER BY created_at
                    "#,
                )
                .fetch_all(self.db.inner_ref())
                .await
            }
            SalesScope::Host(email) => {
                sqlx::query_as(
                    r#"
                        SELECT booked_date, price
                        FROM bookings
                        WHERE host_email = $1
                        ORDER BY created_at
                    "#,
                )
                .bind(email)
                .fetch_all(self.db.inner_ref())
                .await
            }
            SalesScope::Guest(email) => {
                sqlx::query_as(
                    r#"
                        SELECT booked_date, price
                        FROM bookings
                        WHERE guest_email = $1
                        ORDER BY created_at
                    "#,
                )
                .bind(email)
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(SalePoint::from).collect())
    }
}
