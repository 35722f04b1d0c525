pub mod mail;
pub mod payment;
