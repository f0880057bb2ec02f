// Library exports for testing and external use

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;
