pub mod config;
pub mod contracts;
mod conversion;
pub mod data_transfer;
mod wire;
