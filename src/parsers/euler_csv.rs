//! # 晶粒取向 CSV 解析器
//!
//! 解析逐行 `phi1,Phi,phi2` 格式的取向文件（度，Bunge 约定）。
//!
//! ## 格式说明
//! ```text
//! 0.0,0.0,0.0        # 每行一个晶粒，三个逗号分隔的浮点数
//! 30.0,45.0,60.0     # 无表头，无引号
//! ```
//!
//! 空行会被跳过；行序保留（第 i 行即聚合体中第 i 个晶粒）。
//! 字段数不为 3 或字段无法解析为浮点数时返回携带行号的解析错误。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/orientation.rs`
//! - 使用 `csv` + `serde` 读取记录

use crate::error::{PolycpError, Result};
use crate::models::CrystalOrientation;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 从文件加载取向列表
pub fn load_orientations(path: &Path) -> Result<Vec<CrystalOrientation>> {
    let file = File::open(path).map_err(|e| PolycpError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_orientations(file, &path.display().to_string())
}

/// 从任意 Read 源解析取向列表
pub fn parse_orientations<R: Read>(reader: R, source_name: &str) -> Result<Vec<CrystalOrientation>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut orientations = Vec::new();

    for (index, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| PolycpError::OrientationParse {
            path: source_name.to_string(),
            line: index as u64 + 1,
            reason: e.to_string(),
        })?;

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        if record.len() != 3 {
            return Err(PolycpError::OrientationParse {
                path: source_name.to_string(),
                line,
                reason: format!("Expected 3 Euler angles, found {} fields", record.len()),
            });
        }

        let orientation: CrystalOrientation =
            record
                .deserialize(None)
                .map_err(|e| PolycpError::OrientationParse {
                    path: source_name.to_string(),
                    line,
                    reason: e.to_string(),
                })?;

        orientations.push(orientation);
    }

    Ok(orientations)
}
