pub mod config;
pub mod enrich;
pub mod error;
pub mod models;
pub mod parser;
pub mod query;
pub mod service;
pub mod storage;

pub use error::{DictError, Result};
pub use service::DictService;
