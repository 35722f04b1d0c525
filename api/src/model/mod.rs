pub mod auth;
pub mod booking;
pub mod payment;
pub mod room;
pub mod stat;
pub mod user;
