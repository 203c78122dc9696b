use config::{Config, Environment, File};
use serde::Deserialize;

/// 配置错误类型 / Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("配置加载失败 / failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// HTTP 服务配置 / HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 日志配置 / Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// 媒体托管协作方配置 / Media hosting collaborator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// 上传服务基础地址 / Upload service base URL
    pub base_url: String,
    pub timeout_ms: u64,
}

/// 房间子系统的业务缺省值 / Business defaults for the rooms subsystem
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsDefaults {
    /// 欢迎房间模板的名称 / Name of the welcome-room template
    pub welcome_room_name: String,
    /// 新建房间的占位头像 / Placeholder photo for newly created rooms
    pub default_photo_url: String,
    /// 媒体上传的目录前缀 / Folder prefix for media uploads
    pub media_folder: String,
}

impl Default for RoomsDefaults {
    fn default() -> Self {
        Self {
            welcome_room_name: "Chatterly".to_string(),
            default_photo_url: "https://via.placeholder.com/60".to_string(),
            media_folder: "Chatterly".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub media: MediaConfig,
    pub rooms: RoomsDefaults,
}

impl AppConfig {
    /// 加载配置：内置缺省 -> 配置文件（可缺省） -> 环境变量
    /// Load configuration: built-in defaults -> file (optional) -> environment
    ///
    /// 环境变量使用 `CHATTERLY__` 前缀，层级用 `__` 分隔，
    /// 例如 `CHATTERLY__SERVER__PORT=8080`。
    /// Environment variables use the `CHATTERLY__` prefix with `__` separators,
    /// e.g. `CHATTERLY__SERVER__PORT=8080`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("logging.level", "info")?
            .set_default("media.base_url", "http://127.0.0.1:9090")?
            .set_default("media.timeout_ms", 3000_i64)?
            .set_default("rooms.welcome_room_name", "Chatterly")?
            .set_default("rooms.default_photo_url", "https://via.placeholder.com/60")?
            .set_default("rooms.media_folder", "Chatterly")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("CHATTERLY").separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
