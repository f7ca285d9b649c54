//! # 选择状态与视图计算
//!
//! 界面的两个下拉框（晶系、滑移面）对应一个显式的 [`Selection`]。
//! [`render_view`] 是纯函数：每次选择变化都从常量表重新计算完整视图，
//! 不缓存、不增量更新。
//!
//! ## 依赖关系
//! - 被 `view/page.rs` 和 `commands/` 使用
//! - 使用 `models/` 查表，`render/` 的图表数据

use crate::error::SlipvizError;
use crate::models::{slip_plane, CrystalSystem};
use crate::render::{PlanePlot, StructurePlot};

/// 当前界面选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub system: CrystalSystem,
    /// 未选择时使用该晶系的第一个滑移面
    pub plane: Option<String>,
}

impl Selection {
    pub fn new(system: CrystalSystem) -> Self {
        Selection {
            system,
            plane: None,
        }
    }

    pub fn with_plane(mut self, label: impl Into<String>) -> Self {
        self.plane = Some(label.into());
        self
    }

    /// 实际生效的滑移面标签
    pub fn plane_label(&self) -> &str {
        self.plane
            .as_deref()
            .unwrap_or(self.system.default_slip_plane().label)
    }

    /// 全部合法选择，按下拉框顺序
    pub fn all() -> Vec<Selection> {
        CrystalSystem::ALL
            .into_iter()
            .flat_map(|system| {
                system
                    .slip_labels()
                    .into_iter()
                    .map(move |label| Selection::new(system).with_plane(label))
            })
            .collect()
    }
}

/// 一次完整渲染的结果
#[derive(Debug)]
pub struct View {
    pub selection: Selection,
    /// 第二个下拉框的选项
    pub plane_options: Vec<&'static str>,
    pub structure: StructurePlot,
    /// 滑移面图；标签无效时为错误，单胞图不受影响
    pub plane: Result<PlanePlot, SlipvizError>,
}

impl View {
    /// 页面上显示的错误信息
    pub fn error_message(&self) -> Option<String> {
        self.plane.as_ref().err().map(|e| e.to_string())
    }
}

/// 根据选择计算视图
pub fn render_view(selection: &Selection) -> View {
    let system = selection.system;
    let structure = StructurePlot::from_cell(&system.unit_cell());
    let plane = slip_plane(system, selection.plane_label())
        .map(|sp| PlanePlot::from_slip(system, sp));

    View {
        selection: selection.clone(),
        plane_options: system.slip_labels(),
        structure,
        plane,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point3D;

    fn pts(coords: &[(f64, f64, f64)]) -> Vec<Point3D> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn test_bcc_110_scenario() {
        let view = render_view(&Selection::new(CrystalSystem::Bcc).with_plane("(110)"));
        assert_eq!(view.structure.marker_count(), 8);
        assert_eq!(view.structure.faces.len(), 6);

        let plane = view.plane.unwrap();
        assert_eq!(plane.title, "BCC Slip Plane (110)");
        assert_eq!(
            plane.points,
            pts(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (1.0, 1.0, 0.0)])
        );
        assert!(plane.points.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_fcc_111_scenario() {
        let view = render_view(&Selection::new(CrystalSystem::Fcc).with_plane("(111)"));
        assert_eq!(view.structure.corners.len(), 8);
        assert_eq!(view.structure.highlights.as_ref().map(Vec::len), Some(6));
        assert_eq!(view.structure.marker_count(), 14);
        assert_eq!(view.structure.faces.len(), 6);

        let plane = view.plane.unwrap();
        assert_eq!(
            plane.points,
            pts(&[(0.0, 0.0, 1.0), (0.0, 1.0, 0.0), (1.0, 0.0, 0.0)])
        );
    }

    #[test]
    fn test_bcc_123_scenario() {
        let view = render_view(&Selection::new(CrystalSystem::Bcc).with_plane("(123)"));
        let plane = view.plane.unwrap();
        assert_eq!(
            plane.points,
            pts(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.5, 1.0, 0.5), (0.33, 0.67, 1.0)])
        );
    }

    #[test]
    fn test_fcc_minus1minus11_scenario() {
        let view = render_view(&Selection::new(CrystalSystem::Fcc).with_plane("(-1-11)"));
        let plane = view.plane.unwrap();
        assert_eq!(
            plane.points,
            pts(&[(-1.0, 0.0, 0.0), (0.0, -1.0, 0.0), (0.0, 0.0, 1.0)])
        );
    }

    #[test]
    fn test_invalid_plane_keeps_structure() {
        let view = render_view(&Selection::new(CrystalSystem::Bcc).with_plane("(999)"));
        assert!(view.plane.is_err());
        assert_eq!(
            view.error_message().as_deref(),
            Some("Invalid slip plane selected.")
        );
        assert_eq!(view.structure.title, "BCC Crystal System");
        assert_eq!(view.structure.marker_count(), 8);
    }

    #[test]
    fn test_default_plane_is_first_option() {
        let view = render_view(&Selection::new(CrystalSystem::Fcc));
        assert_eq!(view.plane_options, vec!["(111)", "(-111)", "(1-11)", "(-1-11)"]);
        assert_eq!(view.plane.unwrap().title, "FCC Slip Plane (111)");
    }

    #[test]
    fn test_render_view_is_repeatable() {
        let sel = Selection::new(CrystalSystem::Bcc).with_plane("(112)");
        let a = render_view(&sel);
        let b = render_view(&sel);
        assert_eq!(a.structure, b.structure);
        assert_eq!(a.plane.unwrap(), b.plane.unwrap());
    }

    #[test]
    fn test_all_selections() {
        let all = Selection::all();
        assert_eq!(all.len(), 7);
        assert!(all.iter().all(|s| render_view(s).plane.is_ok()));
    }
}
