//! # page / explore 子命令 CLI 定义
//!
//! - `page`: 生成包含下拉框与全部视图的 HTML 页面
//! - `explore`: 终端交互式选择晶系与滑移面
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/page.rs`, `commands/explore.rs`

use crate::cli::plot::{PlotFormat, SizeArgs};
use crate::models::CrystalSystem;

use clap::Args;
use std::path::PathBuf;

/// page 子命令参数
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Output HTML file
    #[arg(short, long, default_value = "slipviz.html")]
    pub output: PathBuf,

    /// Initially selected crystal system
    #[arg(long, value_enum, default_value = "bcc")]
    pub system: CrystalSystem,

    /// Initially selected slip plane (default: first plane of the system)
    #[arg(long, allow_hyphen_values = true)]
    pub plane: Option<String>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    #[command(flatten)]
    pub size: SizeArgs,
}

/// explore 子命令参数
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// Directory for the rendered images
    #[arg(short, long, env = "SLIPVIZ_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: PlotFormat,

    #[command(flatten)]
    pub size: SizeArgs,
}
