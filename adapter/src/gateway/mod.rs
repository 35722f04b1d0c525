pub mod smtp;
pub mod stripe;
