pub mod auth;
pub mod database;
pub mod gateway;
pub mod repository;
