// chatterly-rooms 库主入口，按需导出模块
// chatterly-rooms library entry, exports modules on demand

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod media;
pub mod response;
pub mod router;
pub mod server;
pub mod service;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::error::RoomsError;
pub use crate::logging::init_tracing;
pub use crate::server::RoomsServer;
pub use crate::service::RoomsService;

// 重新导出 tracing 宏，方便调用方使用
// Re-export tracing macros for caller convenience
pub use tracing::{debug, error, info, trace, warn};
