//! # 数据模型模块
//!
//! 定义晶粒取向数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `commands/`, `cp/` 使用
//! - 子模块: orientation

pub mod orientation;

pub use orientation::CrystalOrientation;
