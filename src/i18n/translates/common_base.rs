/// Locale codes served by the common base dictionary
pub const CODES: &[&str] = &["zh-CN"];

/// Simplified Chinese strings used by the shared admin menu helpers
pub const ZH_CN: &[(&str, &str)] = &[
    ("Expand/Collapse All", "展开/折叠全部"),
    ("Refresh", "刷新"),
    ("Fullscreen", "全屏"),
    ("Export to Excel", "导出到Excel"),
    ("Print", "打印"),
    ("Page size", "每页数量"),
    ("Add", "添加"),
    ("Edit", "编辑"),
    ("Delete", "删除"),
    ("Recycle Bin", "回收站"),
];
