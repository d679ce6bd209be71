//! 应用主循环
//!
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        主循环 (app.rs)                       │
//! │                                                              │
//! │   ┌─────────┐        ┌───────────┐        ┌──────────┐       │
//! │   │  Event  │ ─────▶ │  Message  │ ─────▶ │  Update  │       │
//! │   │   层    │  翻译   │    层     │  消费   │    层    │       │
//! │   └─────────┘        └───────────┘        └────┬─────┘       │
//! │        ▲                   ▲                   │ 修改        │
//! │        │                   │ 完成通知           ▼             │
//! │   ┌─────────┐        ┌───────────┐        ┌──────────┐       │
//! │   │  View   │        │  Backend  │        │  Model   │       │
//! │   │   层    │ ◀──────│    层     │───────▶│    层    │       │
//! │   └─────────┘  读取   └───────────┘  广播   └──────────┘       │
//! └──────────────────────────────────────────────────────────────┘
//!
//! 每一轮循环：
//!     1. 排空实体更新订阅（详情页原地刷新）
//!     2. 排空后台完成通知（HTTP 调用的结果）
//!     3. 渲染 UI
//!     4. 轮询输入（100ms 超时），有按键则翻译成消息并更新状态
//!
//! 后台调用在 tokio 运行时上执行，主循环自身保持同步；
//! 正在加载/保存的页面在下一轮渲染时显示对应状态。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 详情页消费实体更新广播
        update::drain_entity_updates(app);

        // 2. 处理后台完成通知
        while let Some(msg) = backend.try_recv() {
            update::update(app, msg, backend);
        }

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 6. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 7. 更新状态
            update::update(app, msg, backend);
        }
    }

    Ok(())
}
