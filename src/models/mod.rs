//! # 数据模型模块
//!
//! 定义晶胞与滑移面的固定几何数据。所有数据在编译期确定，运行期不可变。
//!
//! ## 依赖关系
//! - 被 `view/`, `render/` 和 `commands/` 使用
//! - 子模块: point, structure, slip

pub mod point;
pub mod slip;
pub mod structure;

pub use point::Point3D;
pub use slip::{plane_title, slip_plane, SlipPlane};
pub use structure::{CrystalSystem, UnitCell};
