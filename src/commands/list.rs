//! # list 子命令实现
//!
//! 用表格列出晶系、滑移面标签与顶点坐标。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的 ListArgs
//! - 使用 `tabled` 输出表格

use crate::cli::inspect::ListArgs;
use crate::error::Result;
use crate::models::CrystalSystem;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SystemRow {
    #[tabled(rename = "System")]
    system: String,
    #[tabled(rename = "Atoms")]
    atoms: usize,
    #[tabled(rename = "Corners")]
    corners: usize,
    #[tabled(rename = "Face centers")]
    face_centers: usize,
    #[tabled(rename = "Faces")]
    faces: usize,
    #[tabled(rename = "Slip planes")]
    planes: String,
}

#[derive(Tabled)]
struct PlaneRow {
    #[tabled(rename = "Plane")]
    label: String,
    #[tabled(rename = "Vertices")]
    count: usize,
    #[tabled(rename = "Coordinates")]
    points: String,
}

/// 执行 list 子命令
pub fn execute(args: ListArgs) -> Result<()> {
    let systems: Vec<CrystalSystem> = match args.system {
        Some(system) => vec![system],
        None => CrystalSystem::ALL.to_vec(),
    };

    output::print_header("Crystal Systems");
    println!("{}", Table::new(system_rows(&systems)));

    if args.points {
        for system in &systems {
            output::print_header(&format!("{} Slip Planes", system));
            println!("{}", Table::new(plane_rows(*system)));
        }
    }

    Ok(())
}

fn system_rows(systems: &[CrystalSystem]) -> Vec<SystemRow> {
    systems
        .iter()
        .map(|system| {
            let cell = system.unit_cell();
            SystemRow {
                system: system.to_string(),
                atoms: cell.atom_count(),
                corners: cell.corners.len(),
                face_centers: cell.face_centers.map_or(0, |fc| fc.len()),
                faces: cell.faces().len(),
                planes: system.slip_labels().join(" "),
            }
        })
        .collect()
}

fn plane_rows(system: CrystalSystem) -> Vec<PlaneRow> {
    system
        .slip_planes()
        .iter()
        .map(|sp| PlaneRow {
            label: sp.label.to_string(),
            count: sp.points.len(),
            points: sp
                .points
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}
