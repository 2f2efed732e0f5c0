//! 产品模块

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use model::{Product, ProductInput};
pub use repository::{MemoryProductStore, PgProductStore, ProductStore};
pub use service::ProductService;
