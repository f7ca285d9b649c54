//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `render/`, `view/`, `utils/`
//! - 子模块: plot, page, explore, list, export

pub mod explore;
pub mod export;
pub mod list;
pub mod page;
pub mod plot;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Structure(args) => plot::execute_structure(args),
        Commands::Plane(args) => plot::execute_plane(args),
        Commands::Page(args) => page::execute(args),
        Commands::Explore(args) => explore::execute(args),
        Commands::List(args) => list::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
