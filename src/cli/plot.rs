//! # structure / plane 子命令 CLI 定义
//!
//! 单独绘制单胞图或滑移面图到 PNG/SVG 文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use crate::models::CrystalSystem;
use crate::render::DEFAULT_SIZE;

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

impl PlotFormat {
    /// 从文件扩展名推断输出格式
    pub fn from_extension(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => PlotFormat::Svg,
            _ => PlotFormat::Png,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            PlotFormat::Png => "png",
            PlotFormat::Svg => "svg",
        }
    }
}

impl std::fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 图表尺寸参数
#[derive(Args, Debug, Clone, Copy)]
pub struct SizeArgs {
    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, env = "SLIPVIZ_WIDTH", default_value_t = DEFAULT_SIZE)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, env = "SLIPVIZ_HEIGHT", default_value_t = DEFAULT_SIZE)]
    pub height: u32,
}

/// structure 子命令参数
#[derive(Args, Debug)]
pub struct StructureArgs {
    /// Crystal system to draw
    #[arg(value_enum)]
    pub system: CrystalSystem,

    /// Output image file (default: <system>_cell.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotFormat>,

    /// Title for the plot (default: "<SYSTEM> Crystal System")
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub size: SizeArgs,
}

/// plane 子命令参数
#[derive(Args, Debug)]
pub struct PlaneArgs {
    /// Crystal system the slip plane belongs to
    #[arg(value_enum)]
    pub system: CrystalSystem,

    /// Slip plane label, e.g. "(110)" or "-1-11"
    #[arg(allow_hyphen_values = true)]
    pub label: String,

    /// Output image file (default: <system>_<label>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotFormat>,

    #[command(flatten)]
    pub size: SizeArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(PlotFormat::from_extension(Path::new("a.svg")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_extension(Path::new("a.SVG")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_extension(Path::new("a.png")), PlotFormat::Png);
        assert_eq!(PlotFormat::from_extension(Path::new("noext")), PlotFormat::Png);
    }
}
