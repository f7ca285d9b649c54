//! # page 子命令实现
//!
//! 渲染全部 (晶系, 滑移面) 视图并写出 HTML 页面。
//!
//! ## 依赖关系
//! - 使用 `cli/page.rs` 定义的 PageArgs
//! - 使用 `batch/` 并行渲染
//! - 使用 `view/` 计算视图与生成页面

use crate::batch::BatchRunner;
use crate::cli::page::PageArgs;
use crate::error::{Result, SlipvizError};
use crate::utils::output;
use crate::view::{self, render_view, Selection};

use std::fs;

/// 执行 page 子命令
pub fn execute(args: PageArgs) -> Result<()> {
    output::print_header("Crystal Plasticity Visualizer");

    let initial = match args.plane {
        Some(ref label) => Selection::new(args.system).with_plane(label.clone()),
        None => Selection::new(args.system),
    };

    let selections = page_selections(&initial);

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Rendering {} views with {} jobs",
        selections.len(),
        runner.jobs()
    ));

    let (width, height) = (args.size.width, args.size.height);
    let result = runner.run(selections, "Rendering", |selection| {
        view::render_svgs(render_view(&selection), width, height)
    })?;

    output::print_success(&format!(
        "Rendered {} views ({} failed)",
        result.success, result.failed
    ));

    let views = result.into_outputs()?;

    for v in &views {
        if let Err(msg) = &v.plane_svg {
            output::print_warning(&format!(
                "{} {}: {}",
                v.selection.system,
                v.selection.plane_label(),
                msg
            ));
        }
    }

    let html = view::page_html(&views, &initial)?;
    fs::write(&args.output, html).map_err(|e| SlipvizError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    output::print_done(&format!("Page written to '{}'", args.output.display()));
    Ok(())
}

/// 页面需要的全部选择
///
/// 所有合法组合，加上不在表中的初始选择（页面会显示错误信息）。
fn page_selections(initial: &Selection) -> Vec<Selection> {
    let mut selections = Selection::all();
    let initial_label = crate::models::slip::normalize_label(initial.plane_label());

    let known = selections.iter().any(|s| {
        s.system == initial.system && Some(s.plane_label()) == initial_label.as_deref()
    });

    if !known {
        selections.push(initial.clone());
    }
    selections
}
