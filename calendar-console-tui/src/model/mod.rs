//! Model 层：应用状态
//!
//! Model 层保存 UI 需要的全部状态，只被 Update 层修改、被 View 层读取。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态结构
//!         mod focus;          // 焦点面板
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面枚举（含访问权限声明）
//!         mod session;        // 会话（登录用户与权限）
//!         pub mod state;      // 各页面/弹窗状态
//!
//! 页面即"路由"：`Page` 的每个变体对应一个可导航状态，详情页变体携带
//! 目标实体 id。每个页面声明访问所需的权限（`required_authority`），
//! 导航确认时由 Update 层检查会话是否持有该权限。
//!
//! 详情页状态在进入时记录来源页面（返回导航用）并持有实体更新订阅；
//! 弹窗状态为每种对话框保存其全部表单数据。

mod app;
mod focus;
mod navigation;
mod page;
mod session;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use session::Session;
pub use state::{
    CalendarDetailState, CalendarsState, EntityKind, EventDetailState, EventsState, Modal,
    ModalState, PreviousPage,
};
