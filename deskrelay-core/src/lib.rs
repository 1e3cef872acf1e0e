pub mod api;
pub mod auth;
pub mod client;
pub mod constants;
pub mod http;
pub mod obj;
