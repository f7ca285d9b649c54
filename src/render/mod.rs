//! # 三维图表渲染
//!
//! 使用 `plotters` 绘制单胞图与滑移面图。
//!
//! ## 功能
//! - 单胞：半透明立方体面 + 角原子 + 可选的面心原子，固定坐标范围
//! - 滑移面：半透明多边形 + 顶点标记，坐标范围随顶点自适应
//! - 输出 PNG / SVG 文件，或内存中的 SVG 字符串（用于 HTML 页面）
//!
//! ## 依赖关系
//! - 被 `view/` 和 `commands/` 调用
//! - 使用 `models/` 的几何数据
//! - 使用 `plotters` 渲染图表

pub mod plane;
pub mod structure;

pub use plane::PlanePlot;
pub use structure::StructurePlot;

use crate::error::{Result, SlipvizError};

use plotters::coord::cartesian::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// 图表默认尺寸（像素）
pub const DEFAULT_SIZE: u32 = 800;

/// 三维笛卡尔坐标图表
pub(crate) type Chart3d<'a, DB> =
    ChartContext<'a, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>;

/// 待渲染的图表
#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    Structure(StructurePlot),
    Plane(PlanePlot),
}

impl Plot {
    /// 在给定绘图区上绘制
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        match self {
            Plot::Structure(p) => structure::draw_structure(root, p),
            Plot::Plane(p) => plane::draw_plane(root, p),
        }
    }
}

/// 保存图表到文件 (PNG 或 SVG)
pub fn save_plot(plot: &Plot, output_path: &Path, width: u32, height: u32, use_svg: bool) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        plot.draw(&root)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        plot.draw(&root)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 渲染为 SVG 字符串
pub fn plot_to_svg(plot: &Plot, width: u32, height: u32) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        plot.draw(&root)?;
        root.present().map_err(plot_err)?;
    }
    Ok(svg)
}

/// plotters 错误统一转为 PlotError
pub(crate) fn plot_err<E: std::fmt::Debug>(e: E) -> SlipvizError {
    SlipvizError::PlotError(format!("{:?}", e))
}

/// 设置统一的三维视角
pub(crate) fn apply_projection<DB: DrawingBackend>(
    chart: &mut Chart3d<'_, DB>,
) {
    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.8;
        pb.into_matrix()
    });
}

/// 在三根坐标轴末端标注 X-axis / Y-axis / Z-axis
pub(crate) fn draw_axis_labels<DB: DrawingBackend>(
    chart: &mut Chart3d<'_, DB>,
    x: &Range<f64>,
    y: &Range<f64>,
    z: &Range<f64>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let style = ("sans-serif", 16).into_font().color(&BLACK);
    let labels = [
        ("X-axis", (x.end, y.start, z.start)),
        ("Y-axis", (x.start, y.end, z.start)),
        ("Z-axis", (x.start, y.start, z.end)),
    ];

    chart
        .draw_series(
            labels
                .into_iter()
                .map(|(text, pos)| Text::new(text, pos, style.clone())),
        )
        .map_err(plot_err)?;

    Ok(())
}
