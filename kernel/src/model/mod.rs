pub mod booking;
pub mod id;
pub mod role;
pub mod room;
pub mod stat;
pub mod user;
