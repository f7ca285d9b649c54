//! # structure / plane 子命令实现
//!
//! 把单胞图或滑移面图写入 PNG/SVG 文件。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `models/` 查表，`render/` 绘图

use crate::cli::plot::{PlaneArgs, PlotFormat, StructureArgs};
use crate::error::Result;
use crate::models::{slip_plane, CrystalSystem};
use crate::render::{self, PlanePlot, Plot, StructurePlot};
use crate::utils::output;
use crate::view::page::view_id;

use std::path::{Path, PathBuf};

/// 执行 structure 子命令
pub fn execute_structure(args: StructureArgs) -> Result<()> {
    output::print_header(&format!("{} Unit Cell", args.system));

    let cell = args.system.unit_cell();
    let mut plot = StructurePlot::from_cell(&cell);
    if let Some(title) = args.title {
        plot.title = title;
    }

    output::print_info(&format!(
        "{} atoms ({} corner), {} faces",
        plot.marker_count(),
        plot.corners.len(),
        plot.faces.len()
    ));

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(structure_file_name(args.system, PlotFormat::Png)));
    let format = args.format.unwrap_or_else(|| PlotFormat::from_extension(&path));

    save(&Plot::Structure(plot), &path, format, args.size.width, args.size.height)?;
    output::print_success(&format!("Unit cell saved to '{}'", path.display()));
    Ok(())
}

/// 执行 plane 子命令
pub fn execute_plane(args: PlaneArgs) -> Result<()> {
    output::print_header(&format!("{} Slip Plane", args.system));

    let plane = slip_plane(args.system, &args.label)?;
    output::print_info(&format!(
        "{} {}: {} vertices",
        args.system,
        plane.label,
        plane.points.len()
    ));
    output::print_points(plane.points);

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(plane_file_name(args.system, plane.label, PlotFormat::Png)));
    let format = args.format.unwrap_or_else(|| PlotFormat::from_extension(&path));

    let plot = PlanePlot::from_slip(args.system, plane);
    save(&Plot::Plane(plot), &path, format, args.size.width, args.size.height)?;
    output::print_success(&format!("Slip plane saved to '{}'", path.display()));
    Ok(())
}

/// 保存图表
pub(crate) fn save(plot: &Plot, path: &Path, format: PlotFormat, width: u32, height: u32) -> Result<()> {
    render::save_plot(plot, path, width, height, format == PlotFormat::Svg)
}

/// 单胞图默认文件名，如 `bcc_cell.png`
pub(crate) fn structure_file_name(system: CrystalSystem, format: PlotFormat) -> String {
    format!("{}_cell.{}", system.slug(), format.extension())
}

/// 滑移面图默认文件名，如 `fcc_m1m11.svg`
pub(crate) fn plane_file_name(system: CrystalSystem, label: &str, format: PlotFormat) -> String {
    let id = view_id(system, label);
    format!("{}.{}", id.replace('-', "_"), format.extension())
}
