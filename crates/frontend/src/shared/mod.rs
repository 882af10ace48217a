pub mod api_client;
pub mod api_utils;
pub mod config;
pub mod latest;
pub mod toast;
