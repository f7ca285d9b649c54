//! # 晶胞结构数据
//!
//! BCC 与 FCC 单胞的固定几何表：8 个角原子、6 个立方体面，
//! 以及 FCC 的 6 个面心原子。
//!
//! 面心坐标作为显式数据保存，不从角点推导。
//!
//! ## 依赖关系
//! - 被 `models/slip.rs`, `view/`, `commands/` 使用
//! - 使用 `models/point.rs`

use crate::models::point::Point3D;

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// 立方单胞的 8 个顶点（BCC 与 FCC 共用）
pub const CUBE_CORNERS: [Point3D; 8] = [
    Point3D::new(0.0, 0.0, 0.0),
    Point3D::new(1.0, 0.0, 0.0),
    Point3D::new(0.0, 1.0, 0.0),
    Point3D::new(0.0, 0.0, 1.0),
    Point3D::new(1.0, 1.0, 0.0),
    Point3D::new(1.0, 0.0, 1.0),
    Point3D::new(0.0, 1.0, 1.0),
    Point3D::new(1.0, 1.0, 1.0),
];

/// 立方体 6 个面，按顺序引用 `CUBE_CORNERS` 的下标
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 4, 2],
    [0, 1, 5, 3],
    [0, 2, 6, 3],
    [7, 6, 2, 4],
    [7, 6, 3, 5],
    [7, 4, 1, 5],
];

/// FCC 面心原子
pub const FCC_FACE_CENTERS: [Point3D; 6] = [
    Point3D::new(0.5, 0.5, 0.0),
    Point3D::new(0.5, 0.0, 0.5),
    Point3D::new(0.0, 0.5, 0.5),
    Point3D::new(0.5, 0.5, 1.0),
    Point3D::new(0.5, 1.0, 0.5),
    Point3D::new(1.0, 0.5, 0.5),
];

/// 晶系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
pub enum CrystalSystem {
    /// Body-centered cubic
    Bcc,
    /// Face-centered cubic
    Fcc,
}

impl CrystalSystem {
    /// 所有晶系，按界面选项顺序
    pub const ALL: [CrystalSystem; 2] = [CrystalSystem::Bcc, CrystalSystem::Fcc];

    /// 显示名称
    pub fn name(&self) -> &'static str {
        match self {
            CrystalSystem::Bcc => "BCC",
            CrystalSystem::Fcc => "FCC",
        }
    }

    /// 文件名用的小写标识
    pub fn slug(&self) -> &'static str {
        match self {
            CrystalSystem::Bcc => "bcc",
            CrystalSystem::Fcc => "fcc",
        }
    }

    /// 按名称查找（大小写不敏感）
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }

    /// 该晶系的单胞
    pub fn unit_cell(&self) -> UnitCell {
        match self {
            CrystalSystem::Bcc => UnitCell {
                system: *self,
                corners: &CUBE_CORNERS,
                face_centers: None,
            },
            CrystalSystem::Fcc => UnitCell {
                system: *self,
                corners: &CUBE_CORNERS,
                face_centers: Some(&FCC_FACE_CENTERS),
            },
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单胞几何：角原子 + 可选的面心原子
#[derive(Debug, Clone, Copy)]
pub struct UnitCell {
    pub system: CrystalSystem,
    pub corners: &'static [Point3D],
    pub face_centers: Option<&'static [Point3D]>,
}

impl UnitCell {
    /// 六个面，每个面 4 个点
    pub fn faces(&self) -> Vec<[Point3D; 4]> {
        CUBE_FACES
            .iter()
            .map(|&idx| idx.map(|i| self.corners[i]))
            .collect()
    }

    /// 图表标题
    pub fn title(&self) -> String {
        format!("{} Crystal System", self.system)
    }

    /// 显示的原子总数
    pub fn atom_count(&self) -> usize {
        self.corners.len() + self.face_centers.map_or(0, |fc| fc.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_unit(v: f64) -> bool {
        v == 0.0 || v == 1.0
    }

    #[test]
    fn test_corners_are_cube_vertices() {
        for system in CrystalSystem::ALL {
            let cell = system.unit_cell();
            assert_eq!(cell.corners.len(), 8);
            for p in cell.corners {
                assert!(p.coords().iter().all(|&c| is_unit(c)), "{}", p);
            }
            // 8 个顶点两两不同
            for (i, a) in cell.corners.iter().enumerate() {
                for b in &cell.corners[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_six_faces_of_four_corners() {
        for system in CrystalSystem::ALL {
            let faces = system.unit_cell().faces();
            assert_eq!(faces.len(), 6);
            for face in &faces {
                assert_eq!(face.len(), 4);
                for p in face {
                    assert!(CUBE_CORNERS.contains(p));
                }
            }
        }
    }

    #[test]
    fn test_faces_are_planar_cube_faces() {
        // 每个面上必有一个坐标对 4 个点恒定
        for face in CrystalSystem::Bcc.unit_cell().faces() {
            let constant_axis = (0..3).any(|axis| {
                let first = face[0].coords()[axis];
                face.iter().all(|p| p.coords()[axis] == first)
            });
            assert!(constant_axis);
        }
    }

    #[test]
    fn test_fcc_face_centers() {
        let cell = CrystalSystem::Fcc.unit_cell();
        let centers = cell.face_centers.unwrap();
        assert_eq!(centers.len(), 6);
        for p in centers {
            let coords = p.coords();
            let on_face = coords.iter().filter(|&&c| is_unit(c)).count();
            let halves = coords.iter().filter(|&&c| c == 0.5).count();
            assert_eq!(on_face, 1, "{}", p);
            assert_eq!(halves, 2, "{}", p);
        }
        assert_eq!(cell.atom_count(), 14);
    }

    #[test]
    fn test_bcc_has_no_highlights() {
        let cell = CrystalSystem::Bcc.unit_cell();
        assert!(cell.face_centers.is_none());
        assert_eq!(cell.atom_count(), 8);
        assert_eq!(cell.title(), "BCC Crystal System");
    }

    #[test]
    fn test_system_from_name() {
        assert_eq!(CrystalSystem::from_name("bcc"), Some(CrystalSystem::Bcc));
        assert_eq!(CrystalSystem::from_name(" FCC "), Some(CrystalSystem::Fcc));
        assert_eq!(CrystalSystem::from_name("hcp"), None);
    }
}
