//! # 单胞图
//!
//! 立方体的 6 个面画成半透明四边形（红色边框），角原子用蓝色标记，
//! 面心原子（FCC）用更大的绿色标记。三根轴固定为 [0, 1.5]，保证
//! 不同晶系的单胞显示比例一致。
//!
//! ## 依赖关系
//! - 被 `render/mod.rs` 调用
//! - 使用 `models/structure.rs` 的 UnitCell

use crate::error::Result;
use crate::models::{Point3D, UnitCell};
use crate::render::{apply_projection, draw_axis_labels, plot_err};

use plotters::coord::Shift;
use plotters::prelude::*;

/// 单胞图的固定坐标范围
pub const STRUCTURE_AXIS_RANGE: std::ops::Range<f64> = 0.0..1.5;

pub const CORNER_LABEL: &str = "Corner atoms";
pub const FACE_CENTER_LABEL: &str = "Face-centered atoms";

const FACE_FILL: RGBColor = RGBColor(0, 0, 255);
const FACE_EDGE: RGBColor = RED;
const CORNER_COLOR: RGBColor = BLUE;
const HIGHLIGHT_COLOR: RGBColor = RGBColor(0, 128, 0);

/// 单胞图数据
#[derive(Debug, Clone, PartialEq)]
pub struct StructurePlot {
    pub title: String,
    pub corners: Vec<Point3D>,
    pub faces: Vec<[Point3D; 4]>,
    /// 高亮原子（FCC 面心），BCC 为 None
    pub highlights: Option<Vec<Point3D>>,
}

impl StructurePlot {
    pub fn new(title: impl Into<String>, corners: Vec<Point3D>, faces: Vec<[Point3D; 4]>) -> Self {
        StructurePlot {
            title: title.into(),
            corners,
            faces,
            highlights: None,
        }
    }

    pub fn with_highlights(mut self, points: Vec<Point3D>) -> Self {
        self.highlights = Some(points);
        self
    }

    /// 从单胞构造
    pub fn from_cell(cell: &UnitCell) -> Self {
        let plot = StructurePlot::new(cell.title(), cell.corners.to_vec(), cell.faces());
        match cell.face_centers {
            Some(centers) => plot.with_highlights(centers.to_vec()),
            None => plot,
        }
    }

    /// 图中标记的原子总数
    pub fn marker_count(&self) -> usize {
        self.corners.len() + self.highlights.as_ref().map_or(0, Vec::len)
    }
}

/// 绘制单胞图
pub fn draw_structure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &StructurePlot,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let range = STRUCTURE_AXIS_RANGE;

    let mut chart = ChartBuilder::on(root)
        .caption(&plot.title, ("sans-serif", 28).into_font())
        .margin(20)
        .build_cartesian_3d(range.clone(), range.clone(), range.clone())
        .map_err(plot_err)?;

    apply_projection(&mut chart);

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()
        .map_err(plot_err)?;

    // 立方体面：填充 + 边框
    chart
        .draw_series(plot.faces.iter().map(|face| {
            Polygon::new(
                face.iter().map(Point3D::as_tuple).collect::<Vec<_>>(),
                FACE_FILL.mix(0.1).filled(),
            )
        }))
        .map_err(plot_err)?;

    chart
        .draw_series(plot.faces.iter().map(|face| {
            let mut outline: Vec<_> = face.iter().map(Point3D::as_tuple).collect();
            outline.push(face[0].as_tuple());
            PathElement::new(outline, FACE_EDGE.stroke_width(1))
        }))
        .map_err(plot_err)?;

    chart
        .draw_series(
            plot.corners
                .iter()
                .map(|p| Circle::new(p.as_tuple(), 5, CORNER_COLOR.filled())),
        )
        .map_err(plot_err)?
        .label(CORNER_LABEL)
        .legend(|(x, y)| Circle::new((x, y), 5, CORNER_COLOR.filled()));

    if let Some(ref highlights) = plot.highlights {
        chart
            .draw_series(
                highlights
                    .iter()
                    .map(|p| Circle::new(p.as_tuple(), 8, HIGHLIGHT_COLOR.filled())),
            )
            .map_err(plot_err)?
            .label(FACE_CENTER_LABEL)
            .legend(|(x, y)| Circle::new((x, y), 7, HIGHLIGHT_COLOR.filled()));
    }

    draw_axis_labels(&mut chart, &range, &range, &range)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}
