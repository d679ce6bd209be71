//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，持有 API 客户端、实体更新总线、配置与
//! 令牌存储，是应用的组合根。
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod api_service;    // API 调用（spawn 到 tokio，结果投回主循环）
//!         mod config;         // 配置持久化（JSON 文件）
//!         mod token_store;    // 令牌存储（keyring）
//!         mod update_bus;     // 实体更新总线（类型化广播通道）
//!
//! 数据流：
//!     用户在弹窗中确认保存
//!         ↓
//!     Update 层调用 `backend.api.save_calendar(...)`（spawn，不等待）
//!         ↓
//!     calendar-console-client 执行 HTTP 调用
//!         ↓
//!     结果作为 `AppMessage::Backend(..)` 进入 mpsc 通道
//!         ↓
//!     主循环 `try_recv` 取出，交给 Update 层
//!         ↓
//!     保存成功 → 更新总线广播新实体 → 详情页原地刷新

mod api_service;
mod config;
mod token_store;
mod update_bus;

use std::sync::Arc;

use calendar_console_client::CalendarClient;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::message::AppMessage;

pub use api_service::ApiService;
pub use config::Config;
pub use token_store::TokenStore;
pub use update_bus::UpdateBus;

/// Backend 组合根
pub struct Backend {
    /// API 调用服务
    pub api: ApiService,
    /// 实体更新总线
    pub bus: UpdateBus,
    /// 应用配置
    pub config: Config,
    /// 令牌存储
    pub tokens: TokenStore,
    /// 后台完成通知的接收端
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl Backend {
    /// 组装 Backend：客户端、总线、通知通道
    pub fn new(handle: Handle, config: Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Arc::new(CalendarClient::new(&config.server_url));

        Self {
            api: ApiService::new(client, handle, tx),
            bus: UpdateBus::new(),
            config,
            tokens: TokenStore::new(),
            rx,
        }
    }

    /// 取出一条后台完成通知（非阻塞）
    pub fn try_recv(&mut self) -> Option<AppMessage> {
        self.rx.try_recv().ok()
    }
}
