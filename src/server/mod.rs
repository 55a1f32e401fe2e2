pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod utils;

pub use self::config::ServerConfig;
pub use self::core::serve;
