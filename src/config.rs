//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of records per result page / 默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// Dictionary database configuration / 字典数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Query configuration / 查询配置
    #[serde(default)]
    pub query: QueryConfig,
    /// Uploaded image directory / 图片目录
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Database configuration / 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Data directory path / 数据目录路径
    pub data_dir: String,
    /// Dictionary database file (relative to data_dir) / 字典数据库文件
    pub db_file: String,
    /// Connection pool size / 连接池大小
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Query configuration / 查询配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Records per page / 每页条数
    pub page_size: i64,
}

/// Upload directory configuration / 图片目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory served under /Upload / 静态图片目录
    pub dir: String,
}

fn default_max_connections() -> u32 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
            db_file: "字典20880条数据.db".to_string(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: "Upload".to_string(),
        }
    }
}

impl AppConfig {
    /// Get the dictionary database file path / 获取字典数据库文件路径
    pub fn get_database_path(&self) -> PathBuf {
        Path::new(&self.database.data_dir).join(&self.database.db_file)
    }

    /// Get the read-only database URL / 获取只读数据库URL
    pub fn get_database_url(&self) -> String {
        format!("sqlite:{}?mode=ro", self.get_database_path().to_string_lossy())
    }

    /// Get the upload directory / 获取图片目录
    pub fn get_upload_dir(&self) -> PathBuf {
        PathBuf::from(&self.upload.dir)
    }

    /// Page size, never below 1 / 每页条数（至少为1）
    pub fn page_size(&self) -> i64 {
        self.query.page_size.max(1)
    }

    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Get the config file path / 获取配置文件路径
pub fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config(config_path: &Path) -> Result<AppConfig, String> {
    if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config(config_path, &config)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config(config_path: &Path, config: &AppConfig) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size(), 50);
        assert_eq!(config.get_bind_address(), "0.0.0.0:5000");
        assert!(config.get_database_url().starts_with("sqlite:"));
        assert!(config.get_database_url().ends_with("?mode=ro"));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.query.page_size, DEFAULT_PAGE_SIZE);

        let reloaded = load_config(&path).unwrap();
        assert_eq!(reloaded.database.db_file, config.database.db_file);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"query": {"page_size": 20}}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.page_size(), 20);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_page_size_floor() {
        let mut config = AppConfig::default();
        config.query.page_size = 0;
        assert_eq!(config.page_size(), 1);
    }
}
