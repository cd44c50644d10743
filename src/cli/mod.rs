//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `simulate`: 运行多晶体单轴拉伸模拟
//! - `orientations`: 取向文件工具（嵌套子命令）
//!   - `inspect`: 检查取向文件
//!   - `generate`: 生成随机取向
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: simulate, orientations

pub mod orientations;
pub mod simulate;

use clap::{Parser, Subcommand};

/// Polycp - 多晶体晶体塑性模拟工具箱
#[derive(Parser)]
#[command(name = "polycp")]
#[command(version)]
#[command(about = "A crystal plasticity polycrystal simulation toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run a polycrystal uniaxial tensile test and plot the stress-strain curve
    Simulate(simulate::SimulateArgs),

    /// Inspect or generate grain orientation files
    Orientations(orientations::OrientationsArgs),
}
