//! # Product Service
//!
//! 基于 Axum + SQLx 的产品 CRUD 服务，分层结构：
//! - `app`：路由、处理器、业务服务和存储
//! - `core`：错误处理和中间件
//! - `infrastructure`：数据库连接池和日志
//! - `config`：配置文件与环境变量

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use config::{Config, ConfigError};
pub use crate::core::error::CoreError;
