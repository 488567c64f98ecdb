pub mod config;
pub mod logging;

// Domain modules
pub mod auth;
pub mod codegen;
pub mod store;
