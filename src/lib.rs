pub mod banner;
pub mod client;
pub mod configuration;
pub mod forms;
pub mod models;
pub mod proto;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
