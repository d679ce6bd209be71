//! Calendar Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 程序入口：
//!     加载配置 → 初始化日志 → 启动 tokio 运行时 → 组装 Backend →
//!     恢复会话（钥匙串中的令牌）→ 初始化终端 → 运行主循环 →
//!     恢复终端（无论成功失败都执行）

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::File;
use std::sync::Arc;

use anyhow::Result;
use calendar_console_client::JwtClaims;
use chrono::Utc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use backend::{Backend, Config};
use model::Session;
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置并初始化日志
    let config = Config::load();
    init_logging();
    apply_theme(&config);

    // 2. 启动 tokio 运行时并组装 Backend
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let mut backend = Backend::new(runtime.handle().clone(), config);

    // 3. 创建应用实例并恢复会话
    let mut app = model::App::new();
    bootstrap_session(&mut app, &backend);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}

/// 日志写入 `CALENDAR_CONSOLE_LOG` 指定的文件。
/// stdout 被备用屏幕占用，不设置该变量则不输出日志。
fn init_logging() {
    let Ok(path) = std::env::var("CALENDAR_CONSOLE_LOG") else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Arc::new(file))
                        .with_ansi(false),
                )
                .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
                .init();
        }
        Err(e) => eprintln!("cannot open log file {path}: {e}"),
    }
}

fn apply_theme(config: &Config) {
    let index = match config.theme.as_str() {
        "light" => 1,
        _ => 0,
    };
    view::theme::set_theme_index(index);
}

/// 用钥匙串中保存的令牌恢复会话；没有可用令牌则打开登录弹窗
fn bootstrap_session(app: &mut model::App, backend: &Backend) {
    if let Some(username) = backend.config.username.clone() {
        if let Some(token) = backend.tokens.get(&username) {
            match JwtClaims::decode(&token) {
                Ok(claims) if !claims.is_expired_at(Utc::now()) => {
                    backend.api.set_token(token);
                    app.session = Session::from_claims(&claims);
                    app.set_status(format!("Welcome back, {}", claims.sub));
                    return;
                }
                Ok(_) => {
                    log::debug!("stored token for {username} has expired");
                    backend.tokens.clear(&username);
                }
                Err(e) => {
                    log::warn!("stored token for {username} is unreadable: {e}");
                    backend.tokens.clear(&username);
                }
            }
        }
        app.modal.show_login(username);
    } else {
        app.modal.show_login("");
    }
}
