//! # 统一错误处理模块
//!
//! 定义 Polycp 的所有错误类型，使用 `thiserror` 派生。
//! 加载失败、模型构造失败、求解失败和绘图失败均为独立变体，
//! 任何失败都会冒泡到 `main` 并以非零退出码报告。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Polycp 统一错误类型
#[derive(Error, Debug)]
pub enum PolycpError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 取向文件解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse orientation file: {path} (line {line})\nReason: {reason}")]
    OrientationParse {
        path: String,
        line: u64,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 模型构造错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid model parameter: {0}")]
    InvalidParameter(String),

    // ─────────────────────────────────────────────────────────────
    // 求解器错误
    // ─────────────────────────────────────────────────────────────
    #[error("Solver failed to converge: {context}")]
    ConvergenceFailure { context: String },

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to render plot: {0}")]
    PlotError(String),

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

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PolycpError>;
