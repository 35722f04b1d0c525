pub mod auth;
pub mod gateway;
pub mod model;
pub mod repository;
