//! # Polycp - 多晶体晶体塑性模拟工具箱
//!
//! 基于 Voce 滑移硬化 + Asaro 非弹性本构的多晶体 Taylor 模型，
//! 驱动单轴拉伸试验并绘制应力-应变曲线。
//!
//! ## 子命令
//! - `simulate` - 完整模拟流程（读取取向 → 组装模型链 → 驱动 → 绘图）
//! - `orientations` - 晶粒取向文件工具
//!   - `inspect`  - 检查取向文件内容
//!   - `generate` - 生成随机均匀取向
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/  (取向文件解析)
//!   │     ├── models/   (取向数据模型)
//!   │     ├── cp/       (晶体塑性本构链)
//!   │     └── drivers/  (试验驱动、绘图、导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod cp;
mod drivers;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
