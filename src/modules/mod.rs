pub mod address;
pub mod auth;
pub mod email;
