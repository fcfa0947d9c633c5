pub mod handlers;
pub mod markdown;
pub mod models;
pub mod routes;
