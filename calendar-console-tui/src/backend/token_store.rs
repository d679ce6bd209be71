//! 令牌存储（keyring）
//!
//! 会话令牌保存在系统钥匙串中，按用户名索引，不落明文文件。
//! 钥匙串不可用（无桌面环境等）时降级为"每次启动都要登录"，
//! 只记日志不报错。

use keyring::Entry;

const SERVICE: &str = "calendar-console";

/// 系统钥匙串里的令牌存储
pub struct TokenStore;

impl TokenStore {
    pub fn new() -> Self {
        Self
    }

    /// 读取指定用户的令牌
    pub fn get(&self, username: &str) -> Option<String> {
        let entry = match Entry::new(SERVICE, username) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("keyring unavailable: {e}");
                return None;
            }
        };
        match entry.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                log::warn!("failed to read token for {username}: {e}");
                None
            }
        }
    }

    /// 保存指定用户的令牌
    pub fn set(&self, username: &str, token: &str) {
        match Entry::new(SERVICE, username) {
            Ok(entry) => {
                if let Err(e) = entry.set_password(token) {
                    log::warn!("failed to store token for {username}: {e}");
                }
            }
            Err(e) => log::warn!("keyring unavailable: {e}"),
        }
    }

    /// 删除指定用户的令牌
    pub fn clear(&self, username: &str) {
        if let Ok(entry) = Entry::new(SERVICE, username) {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(e) => log::warn!("failed to clear token for {username}: {e}"),
            }
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
