//! # slipviz - BCC/FCC 晶胞与滑移面可视化
//!
//! 绘制体心立方 (BCC) 与面心立方 (FCC) 单胞，以及一组预定义的滑移面。
//!
//! ## 子命令
//! - `structure` - 绘制单胞
//! - `plane`     - 绘制滑移面
//! - `page`      - 生成带下拉框的 HTML 页面
//! - `explore`   - 终端交互式浏览
//! - `list`      - 列出晶系与滑移面
//! - `export`    - 导出坐标为 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── view/     (选择状态 → 视图 → 页面)
//!   │     ├── render/   (plotters 三维图表)
//!   │     ├── batch/    (并行渲染)
//!   │     └── models/   (几何数据表)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod render;
mod utils;
mod view;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
