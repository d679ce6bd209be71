//! View 层：UI 渲染
//!
//! View 层只读取 Model，把状态画到终端上，不做任何状态修改。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 + 导航 + 内容 + 状态栏）
//!         mod theme;          // 主题与样式
//!         mod components;     // 导航面板、状态栏、弹窗
//!         mod pages;          // 各页面内容

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
