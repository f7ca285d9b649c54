//! # 三维坐标点
//!
//! 晶胞与滑移面几何数据的基本单元。
//!
//! ## 依赖关系
//! - 被 `models/structure.rs`, `models/slip.rs`, `render/` 使用
//! - 无外部模块依赖

use serde::Serialize;
use std::fmt;

/// 三维坐标 (x, y, z)，仅以数值区分
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3D { x, y, z }
    }

    /// 转为 plotters 三维坐标元组
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3D::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_display() {
        let p = Point3D::new(0.5, 1.0, 0.0);
        assert_eq!(p.to_string(), "(0.5, 1, 0)");
    }

    #[test]
    fn test_point_tuple_conversion() {
        let p: Point3D = (0.33, 0.67, 1.0).into();
        assert_eq!(p.as_tuple(), (0.33, 0.67, 1.0));
        assert_eq!(p.coords(), [0.33, 0.67, 1.0]);
    }
}
