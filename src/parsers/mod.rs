//! # 解析器模块
//!
//! 提供晶粒取向文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: euler_csv

pub mod euler_csv;

pub use euler_csv::load_orientations;
