//! 内容面板消息
//!
//! 处理内容面板中的操作：列表选择、增删改查、搜索过滤与时间窗口

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（进入详情）
    Confirm,

    // ========== CRUD 操作 ==========
    /// 新建实体（打开空白表单）
    Add,
    /// 编辑当前选中项（先解析实体再打开表单）
    Edit,
    /// 删除当前选中项（先解析实体再打开确认弹窗）
    Delete,

    // ========== 搜索过滤 ==========
    /// 进入过滤输入模式
    StartFilter,
    /// 过滤串输入字符
    FilterInput(char),
    /// 过滤串删除字符
    FilterBackspace,
    /// 退出过滤输入模式
    EndFilter,

    // ========== 日程页面专用 ==========
    /// 循环切换时间窗口（全部/一天/一周/一月）
    CycleWindow,
}
