//! # 统一错误处理模块
//!
//! 定义 slipviz 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// slipviz 统一错误类型
#[derive(Error, Debug)]
pub enum SlipvizError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input from terminal")]
    TerminalError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 选择错误
    // ─────────────────────────────────────────────────────────────
    /// 唯一的领域错误：滑移面标签不在该晶系的表中
    #[error("Invalid slip plane selected.")]
    InvalidSlipPlane { system: String, label: String },

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    #[error("Failed to build HTML page")]
    PageError(#[from] std::fmt::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl SlipvizError {
    /// 包含晶系与标签的详细描述（终端输出用）
    pub fn detail(&self) -> String {
        match self {
            SlipvizError::InvalidSlipPlane { system, label } => {
                format!("{} '{}' is not a {} slip plane", self, label, system)
            }
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SlipvizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_slip_plane_message() {
        let err = SlipvizError::InvalidSlipPlane {
            system: "BCC".to_string(),
            label: "(999)".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid slip plane selected.");
        assert!(err.detail().contains("(999)"));
        assert!(err.detail().contains("BCC"));
    }
}
