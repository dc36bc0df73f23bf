pub mod app_context;
pub mod assembler;
pub mod config;
pub mod env;
pub mod shutdown;
