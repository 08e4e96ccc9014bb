pub mod configuration;
pub mod http_client;
pub mod ids;
pub mod kolkata_date;
pub mod tracing;
