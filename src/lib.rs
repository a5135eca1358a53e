pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod shutdown;
pub mod types;

pub use config::Config;
pub use error::NotefulError;
pub use router::{NotefulState, noteful_router};
