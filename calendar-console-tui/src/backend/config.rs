//! 配置服务
//!
//! 配置持久化到 JSON 文件：~/.config/calendar-console/config.json。
//! 读取失败一律回落到默认值，坏配置不应阻止应用启动。

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_DIR: &str = "calendar-console";
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 服务器地址
    pub server_url: String,
    /// 登录弹窗预填的用户名，也是钥匙串中令牌的索引
    pub username: Option<String>,
    /// 主题："dark" 或 "light"
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            username: None,
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// 配置文件路径
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// 加载配置，任何失败都回落到默认值
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("config file {} is invalid: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// 保存配置
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::path() else {
            anyhow::bail!("no config directory available on this platform");
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:8080");
        assert_eq!(config.username, None);
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"serverUrl":"https://cal.example.com"}"#).unwrap();
        assert_eq!(config.server_url, "https://cal.example.com");
        assert_eq!(config.theme, "dark");
    }
}
