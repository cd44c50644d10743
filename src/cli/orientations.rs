//! # orientations 子命令 CLI 定义
//!
//! 取向文件工具统一入口，包含两个子命令：
//! - `inspect`: 检查取向文件内容
//! - `generate`: 生成随机均匀取向
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/orientations.rs`

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// orientations 主命令参数
#[derive(Args, Debug)]
pub struct OrientationsArgs {
    #[command(subcommand)]
    pub command: OrientationsCommands,
}

/// orientations 子命令
#[derive(Subcommand, Debug)]
pub enum OrientationsCommands {
    /// Inspect a grain orientation file
    Inspect(InspectArgs),

    /// Generate uniformly random grain orientations
    Generate(GenerateArgs),
}

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Orientation file to inspect
    pub input: PathBuf,

    /// Number of leading records to print
    #[arg(long, default_value_t = 10)]
    pub head: usize,
}

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output orientation file
    pub output: PathBuf,

    /// Number of grains to generate
    #[arg(long)]
    pub count: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}
