//! # list / export 子命令 CLI 定义
//!
//! 查看与导出几何表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`, `commands/export.rs`

use crate::models::CrystalSystem;

use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list this crystal system
    #[arg(long, value_enum)]
    pub system: Option<CrystalSystem>,

    /// Print the coordinates of every slip plane
    #[arg(long, default_value_t = false)]
    pub points: bool,
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Crystal system to export
    #[arg(value_enum)]
    pub system: CrystalSystem,

    /// Output CSV file
    #[arg(short, long, default_value = "geometry.csv")]
    pub output: PathBuf,

    /// Only export this slip plane (default: unit cell and all slip planes)
    #[arg(long, allow_hyphen_values = true)]
    pub plane: Option<String>,
}
