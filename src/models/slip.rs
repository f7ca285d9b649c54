//! # 滑移面数据
//!
//! 每个晶系一张 "标签 → 顶点序列" 的固定表，以及统一的查表入口。
//!
//! ## 功能
//! - BCC: (110), (112), (123)
//! - FCC: (111), (-111), (1-11), (-1-11)
//! - 用户输入标签的规范化（`110` → `(110)`）
//!
//! ## 依赖关系
//! - 被 `view/`, `commands/` 使用
//! - 使用 `models/point.rs`, `models/structure.rs`
//! - 使用 `regex` 解析标签

use crate::error::{Result, SlipvizError};
use crate::models::point::Point3D;
use crate::models::structure::CrystalSystem;

use regex::Regex;
use std::sync::OnceLock;

/// 一个命名的滑移面
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlipPlane {
    pub label: &'static str,
    pub points: &'static [Point3D],
}

const fn p(x: f64, y: f64, z: f64) -> Point3D {
    Point3D::new(x, y, z)
}

/// BCC 滑移面
pub const BCC_SLIP_PLANES: [SlipPlane; 3] = [
    SlipPlane {
        label: "(110)",
        points: &[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)],
    },
    SlipPlane {
        label: "(112)",
        points: &[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.5, 0.5, 1.0)],
    },
    SlipPlane {
        label: "(123)",
        points: &[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.5, 1.0, 0.5), p(0.33, 0.67, 1.0)],
    },
];

/// FCC 滑移面
pub const FCC_SLIP_PLANES: [SlipPlane; 4] = [
    SlipPlane {
        label: "(111)",
        points: &[p(0.0, 0.0, 1.0), p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0)],
    },
    SlipPlane {
        label: "(-111)",
        points: &[p(0.0, 0.0, -1.0), p(0.0, -1.0, 0.0), p(-1.0, 0.0, 0.0)],
    },
    SlipPlane {
        label: "(1-11)",
        points: &[p(1.0, 0.0, 0.0), p(0.0, -1.0, 0.0), p(0.0, 0.0, 1.0)],
    },
    SlipPlane {
        label: "(-1-11)",
        points: &[p(-1.0, 0.0, 0.0), p(0.0, -1.0, 0.0), p(0.0, 0.0, 1.0)],
    },
];

impl CrystalSystem {
    /// 该晶系的滑移面表（顺序即下拉框选项顺序）
    pub fn slip_planes(&self) -> &'static [SlipPlane] {
        match self {
            CrystalSystem::Bcc => &BCC_SLIP_PLANES,
            CrystalSystem::Fcc => &FCC_SLIP_PLANES,
        }
    }

    /// 有效标签列表
    pub fn slip_labels(&self) -> Vec<&'static str> {
        self.slip_planes().iter().map(|sp| sp.label).collect()
    }

    /// 默认滑移面（下拉框的第一项）
    pub fn default_slip_plane(&self) -> &'static SlipPlane {
        &self.slip_planes()[0]
    }
}

/// 查找滑移面
///
/// 标签先经过 [`normalize_label`]，再在该晶系的表中精确匹配。
/// 找不到时返回 [`SlipvizError::InvalidSlipPlane`]。
pub fn slip_plane(system: CrystalSystem, label: &str) -> Result<&'static SlipPlane> {
    let invalid = || SlipvizError::InvalidSlipPlane {
        system: system.name().to_string(),
        label: label.to_string(),
    };

    let normalized = normalize_label(label).ok_or_else(invalid)?;

    system
        .slip_planes()
        .iter()
        .find(|sp| sp.label == normalized)
        .ok_or_else(invalid)
}

/// 滑移面图表标题，如 "BCC Slip Plane (110)"
pub fn plane_title(system: CrystalSystem, label: &str) -> String {
    format!("{} Slip Plane {}", system, label)
}

fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\(?\s*(-?\d)\s*(-?\d)\s*(-?\d)\s*\)?$").expect("valid label regex")
    })
}

/// 规范化米勒指数标签
///
/// 接受 `110`, `(110)`, `( 1 1 0 )`, `-1-11` 等写法，
/// 统一为 `(110)` / `(-1-11)`。不符合三指数形式时返回 `None`。
pub fn normalize_label(label: &str) -> Option<String> {
    let caps = label_regex().captures(label.trim())?;
    Some(format!("({}{}{})", &caps[1], &caps[2], &caps[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_sets() {
        assert_eq!(
            CrystalSystem::Bcc.slip_labels(),
            vec!["(110)", "(112)", "(123)"]
        );
        assert_eq!(
            CrystalSystem::Fcc.slip_labels(),
            vec!["(111)", "(-111)", "(1-11)", "(-1-11)"]
        );
    }

    #[test]
    fn test_label_sets_disjoint() {
        for label in CrystalSystem::Bcc.slip_labels() {
            assert!(!CrystalSystem::Fcc.slip_labels().contains(&label));
        }
    }

    #[test]
    fn test_every_label_resolves_to_three_or_four_points() {
        for system in CrystalSystem::ALL {
            for label in system.slip_labels() {
                let plane = slip_plane(system, label).unwrap();
                assert!(matches!(plane.points.len(), 3 | 4), "{}", label);

                // 重复查表结果一致
                let again = slip_plane(system, label).unwrap();
                assert_eq!(plane.points, again.points);
            }
        }
    }

    #[test]
    fn test_bcc_110_lies_in_z0() {
        let plane = slip_plane(CrystalSystem::Bcc, "(110)").unwrap();
        assert_eq!(
            plane.points,
            &[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)]
        );
        assert!(plane.points.iter().all(|pt| pt.z == 0.0));
    }

    #[test]
    fn test_fcc_negative_indices() {
        let plane = slip_plane(CrystalSystem::Fcc, "(-1-11)").unwrap();
        assert_eq!(
            plane.points,
            &[p(-1.0, 0.0, 0.0), p(0.0, -1.0, 0.0), p(0.0, 0.0, 1.0)]
        );
    }

    #[test]
    fn test_unknown_label_is_error() {
        let err = slip_plane(CrystalSystem::Bcc, "(999)").unwrap_err();
        assert!(matches!(err, SlipvizError::InvalidSlipPlane { .. }));
        assert_eq!(err.to_string(), "Invalid slip plane selected.");

        // 另一晶系的标签同样无效
        assert!(slip_plane(CrystalSystem::Bcc, "(111)").is_err());
        assert!(slip_plane(CrystalSystem::Fcc, "(110)").is_err());
        assert!(slip_plane(CrystalSystem::Fcc, "").is_err());
        assert!(slip_plane(CrystalSystem::Fcc, "hello").is_err());
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("110").as_deref(), Some("(110)"));
        assert_eq!(normalize_label("( 1 1 0 )").as_deref(), Some("(110)"));
        assert_eq!(normalize_label("-1-11").as_deref(), Some("(-1-11)"));
        assert_eq!(normalize_label(" (1-11) ").as_deref(), Some("(1-11)"));
        assert_eq!(normalize_label("(1100)"), None);
        assert_eq!(normalize_label("abc"), None);
    }

    #[test]
    fn test_lookup_accepts_loose_labels() {
        let plane = slip_plane(CrystalSystem::Fcc, "-111").unwrap();
        assert_eq!(plane.label, "(-111)");
    }

    #[test]
    fn test_plane_title() {
        assert_eq!(
            plane_title(CrystalSystem::Bcc, "(110)"),
            "BCC Slip Plane (110)"
        );
    }
}
