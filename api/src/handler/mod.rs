pub mod auth;
pub mod booking;
pub mod health;
pub mod payment;
pub mod room;
pub mod stat;
pub mod user;
