//! # 视图模块
//!
//! 选择状态 → 完整视图 → HTML 页面。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `render/`
//! - 子模块: selection, page

pub mod page;
pub mod selection;

pub use page::{page_html, render_svgs};
pub use selection::{render_view, Selection, View};
