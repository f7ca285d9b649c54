//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `structure`: 绘制 BCC/FCC 单胞
//! - `plane`: 绘制单个滑移面
//! - `page`: 生成交互式 HTML 页面
//! - `explore`: 终端交互式浏览
//! - `list`: 列出晶系与滑移面
//! - `export`: 导出几何坐标为 CSV
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: plot, page, inspect

pub mod inspect;
pub mod page;
pub mod plot;

use clap::{Parser, Subcommand};

/// slipviz - BCC/FCC 晶胞与滑移面可视化
#[derive(Parser)]
#[command(name = "slipviz")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Crystal plasticity visualizer for BCC/FCC unit cells and slip planes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Draw a BCC or FCC unit cell
    Structure(plot::StructureArgs),

    /// Draw one slip plane of a crystal system
    Plane(plot::PlaneArgs),

    /// Write an HTML page with crystal system and slip plane selectors
    Page(page::PageArgs),

    /// Pick a crystal system and slip plane interactively in the terminal
    Explore(page::ExploreArgs),

    /// List crystal systems and their slip planes
    List(inspect::ListArgs),

    /// Export unit cell and slip plane coordinates to CSV
    Export(inspect::ExportArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CrystalSystem;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plane_with_negative_label() {
        let cli = Cli::try_parse_from(["slipviz", "plane", "fcc", "-1-11"]).unwrap();
        match cli.command {
            Commands::Plane(args) => {
                assert_eq!(args.system, CrystalSystem::Fcc);
                assert_eq!(args.label, "-1-11");
            }
            _ => panic!("expected plane command"),
        }
    }

    #[test]
    fn test_unknown_system_rejected() {
        assert!(Cli::try_parse_from(["slipviz", "structure", "hcp"]).is_err());
    }
}
