#[macro_use]
pub mod macros;

pub mod auth_header;
pub mod config;
pub mod otp;
