pub mod common;
pub mod config;
pub mod recipient;
pub mod smtp;
pub mod utils;
