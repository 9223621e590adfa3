pub mod client;
pub mod config;
pub mod data_url;
pub mod error;
pub mod models;
pub mod page;
pub mod provider;
pub mod routes;
pub mod startup;
