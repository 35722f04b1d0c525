use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{event::CreateBooking, Booking},
    id::BookingId,
    stat::{SalePoint, SalesScope},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn find_by_guest(&self, guest_email: &str) -> AppResult<Vec<Booking>>;
    async fn find_by_host(&self, host_email: &str) -> AppResult<Vec<Booking>>;
    async fn delete(&self, booking_id: BookingId) -> AppResult<()>;
    // 統計用の (date, price) 射影をレコードの登録順で返す
    async fn find_sales(&self, scope: SalesScope) -> AppResult<Vec<SalePoint>>;
}
