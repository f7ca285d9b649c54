//! # export 子命令实现
//!
//! 导出单胞与滑移面坐标为 CSV。
//!
//! ## 格式
//! 列：`set,label,index,x,y,z`
//! - `corner` / `face_center`: 单胞原子，label 为晶系名
//! - `plane`: 滑移面顶点，label 为滑移面标签
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的 ExportArgs
//! - 使用 `csv` + `serde` 写出记录

use crate::cli::inspect::ExportArgs;
use crate::error::{Result, SlipvizError};
use crate::models::{slip_plane, CrystalSystem, Point3D, SlipPlane};
use crate::utils::output;

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Serialize, PartialEq)]
pub struct GeometryRecord {
    pub set: &'static str,
    pub label: String,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GeometryRecord {
    fn new(set: &'static str, label: &str, index: usize, p: &Point3D) -> Self {
        let [x, y, z] = p.coords();
        GeometryRecord {
            set,
            label: label.to_string(),
            index,
            x,
            y,
            z,
        }
    }
}

/// 执行 export 子命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header(&format!("Export {} Geometry", args.system));

    let records = match args.plane {
        Some(ref label) => plane_records(slip_plane(args.system, label)?),
        None => system_records(args.system),
    };

    let file = std::fs::File::create(&args.output).map_err(|e| SlipvizError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;
    write_records(file, &args.output, &records)?;

    output::print_success(&format!(
        "{} points written to '{}'",
        records.len(),
        args.output.display()
    ));
    Ok(())
}

/// 单胞 + 全部滑移面
pub fn system_records(system: CrystalSystem) -> Vec<GeometryRecord> {
    let cell = system.unit_cell();
    let mut records: Vec<GeometryRecord> = cell
        .corners
        .iter()
        .enumerate()
        .map(|(i, p)| GeometryRecord::new("corner", system.name(), i, p))
        .collect();

    if let Some(centers) = cell.face_centers {
        records.extend(
            centers
                .iter()
                .enumerate()
                .map(|(i, p)| GeometryRecord::new("face_center", system.name(), i, p)),
        );
    }

    for sp in system.slip_planes() {
        records.extend(plane_records(sp));
    }
    records
}

/// 单个滑移面
pub fn plane_records(plane: &SlipPlane) -> Vec<GeometryRecord> {
    plane
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| GeometryRecord::new("plane", plane.label, i, p))
        .collect()
}

/// 写出 CSV；`output_path` 用于错误信息
pub fn write_records<W: Write>(writer: W, output_path: &Path, records: &[GeometryRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(|e| SlipvizError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
