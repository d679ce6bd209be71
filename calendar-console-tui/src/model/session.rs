//! 会话状态：当前登录用户及其权限

use calendar_console_client::JwtClaims;
use chrono::{DateTime, Utc};

/// 当前会话
///
/// 路由门控读取这里的权限列表；登录/登出由 Backend 层驱动，
/// 但会话数据本身属于 Model。
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// 登录名（None = 未登录）
    pub username: Option<String>,
    /// 已授予的权限，如 `ROLE_USER`
    pub authorities: Vec<String>,
    /// 令牌过期时间
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// 未登录会话
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// 从 JWT 声明构建会话
    pub fn from_claims(claims: &JwtClaims) -> Self {
        Self {
            username: Some(claims.sub.clone()),
            authorities: claims
                .authorities()
                .into_iter()
                .map(str::to_string)
                .collect(),
            expires_at: claims.expires_at(),
        }
    }

    /// 是否已登录
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// 是否持有指定权限
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }

    /// 用于显示的用户名
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("not signed in")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_authority() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(!session.has_authority("ROLE_USER"));
        assert_eq!(session.display_name(), "not signed in");
    }

    #[test]
    fn authority_lookup() {
        let session = Session {
            username: Some("user".into()),
            authorities: vec!["ROLE_USER".into()],
            expires_at: None,
        };
        assert!(session.is_authenticated());
        assert!(session.has_authority("ROLE_USER"));
        assert!(!session.has_authority("ROLE_ADMIN"));
    }
}
