//! # 滑移面图
//!
//! 把 3 或 4 个顶点画成一个半透明青色多边形，顶点再叠加红色标记。
//! 与单胞图不同，坐标范围由顶点决定，不显示图例。
//!
//! ## 依赖关系
//! - 被 `render/mod.rs` 调用
//! - 使用 `models/slip.rs` 的 SlipPlane

use crate::error::Result;
use crate::models::{plane_title, CrystalSystem, Point3D, SlipPlane};
use crate::render::{apply_projection, draw_axis_labels, plot_err};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

const PLANE_FILL: RGBColor = CYAN;
const VERTEX_COLOR: RGBColor = RED;

/// 自适应范围的留白比例
const RANGE_PADDING: f64 = 0.1;

/// 滑移面图数据
#[derive(Debug, Clone, PartialEq)]
pub struct PlanePlot {
    pub title: String,
    pub points: Vec<Point3D>,
}

impl PlanePlot {
    pub fn new(title: impl Into<String>, points: Vec<Point3D>) -> Self {
        PlanePlot {
            title: title.into(),
            points,
        }
    }

    pub fn from_slip(system: CrystalSystem, plane: &SlipPlane) -> Self {
        PlanePlot::new(plane_title(system, plane.label), plane.points.to_vec())
    }

    /// 三根轴的显示范围
    pub fn axis_ranges(&self) -> (Range<f64>, Range<f64>, Range<f64>) {
        (
            fit_range(self.points.iter().map(|p| p.x)),
            fit_range(self.points.iter().map(|p| p.y)),
            fit_range(self.points.iter().map(|p| p.z)),
        )
    }
}

/// 根据数据计算单轴范围
///
/// 两端各留 10% 余量；所有值相同时（如 z=0 平面）扩展为 ±0.5。
pub fn fit_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }

    let span = max - min;
    if span < 1e-9 {
        return (min - 0.5)..(max + 0.5);
    }

    let pad = span * RANGE_PADDING;
    (min - pad)..(max + pad)
}

/// 绘制滑移面图
pub fn draw_plane<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, plot: &PlanePlot) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (x, y, z) = plot.axis_ranges();

    let mut chart = ChartBuilder::on(root)
        .caption(&plot.title, ("sans-serif", 28).into_font())
        .margin(20)
        .build_cartesian_3d(x.clone(), y.clone(), z.clone())
        .map_err(plot_err)?;

    apply_projection(&mut chart);

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()
        .map_err(plot_err)?;

    let vertices: Vec<_> = plot.points.iter().map(Point3D::as_tuple).collect();

    chart
        .draw_series(std::iter::once(Polygon::new(
            vertices.clone(),
            PLANE_FILL.mix(0.5).filled(),
        )))
        .map_err(plot_err)?;

    chart
        .draw_series(
            vertices
                .iter()
                .map(|&v| Circle::new(v, 5, VERTEX_COLOR.filled())),
        )
        .map_err(plot_err)?;

    draw_axis_labels(&mut chart, &x, &y, &z)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slip_plane;

    #[test]
    fn test_fit_range_degenerate_axis() {
        let r = fit_range([0.0, 0.0, 0.0, 0.0].into_iter());
        assert!((r.start - (-0.5)).abs() < 1e-12);
        assert!((r.end - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fit_range_padding() {
        let r = fit_range([-1.0, 0.0, 1.0].into_iter());
        assert!((r.start - (-1.2)).abs() < 1e-12);
        assert!((r.end - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_fit_range_empty() {
        let r = fit_range(std::iter::empty());
        assert_eq!(r, 0.0..1.0);
    }

    #[test]
    fn test_plane_plot_from_slip() {
        let plane = slip_plane(CrystalSystem::Fcc, "(111)").unwrap();
        let plot = PlanePlot::from_slip(CrystalSystem::Fcc, plane);
        assert_eq!(plot.title, "FCC Slip Plane (111)");
        assert_eq!(
            plot.points,
            vec![
                Point3D::new(0.0, 0.0, 1.0),
                Point3D::new(0.0, 1.0, 0.0),
                Point3D::new(1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_plane_ranges_cover_points() {
        for system in CrystalSystem::ALL {
            for sp in system.slip_planes() {
                let plot = PlanePlot::from_slip(system, sp);
                let (x, y, z) = plot.axis_ranges();
                for p in &plot.points {
                    assert!(x.contains(&p.x) && y.contains(&p.y) && z.contains(&p.z));
                }
            }
        }
    }
}
