//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和所有 `commands/` 模块使用
//! - 使用 `models/point.rs` 的 Point3D
//! - 使用 `colored` crate

use crate::models::Point3D;

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    tagged("[OK]".green().bold(), msg);
}

/// 打印错误消息（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    tagged("[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    tagged("[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    tagged("[DONE]".green().bold(), msg);
}

/// 逐行打印顶点坐标
pub fn print_points(points: &[Point3D]) {
    for line in format_points(points) {
        println!("    {}", line.dimmed());
    }
}

fn format_points(points: &[Point3D]) -> Vec<String> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("#{} {}", i + 1, p))
        .collect()
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(RULE_WIDTH);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
