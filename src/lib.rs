pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
pub mod store;

pub use app::App;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
