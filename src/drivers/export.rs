//! # 曲线数据导出
//!
//! 导出应力-应变曲线到 CSV 格式。
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `drivers/mod.rs` 的 DriverResult
//! - 使用 `csv` 库写入 CSV 文件

use crate::drivers::DriverResult;
use crate::error::{PolycpError, Result};

use std::path::Path;

/// 导出曲线为 CSV 格式（带表头）
pub fn to_csv(result: &DriverResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["strain", "stress"])?;

    for (strain, stress) in result.strain.iter().zip(result.stress.iter()) {
        wtr.write_record(&[format!("{:.8e}", strain), format!("{:.6}", stress)])?;
    }

    wtr.flush().map_err(|e| PolycpError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
