//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message：
//!     - 有弹窗打开时，按弹窗类型映射按键
//!     - 过滤输入模式下，字符全部进过滤串
//!     - 其余按键先查全局快捷键，再按焦点面板分发
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//! `handle_event` 只读取 `&App` 并返回一条 `AppMessage`，
//! 状态修改全部留给 Update 层。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
