pub mod client;
pub mod data_dragon;
pub mod endpoints;
pub mod http;
pub mod models;
