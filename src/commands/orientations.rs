//! # orientations 子命令实现
//!
//! 取向文件工具：
//! - `inspect`: 解析取向文件并打印概要与前若干条记录
//! - `generate`: 生成均匀随机取向并写出为加载器兼容的 CSV
//!
//! ## 均匀采样
//! φ1 与 φ2 在 [0°, 360°) 均匀，cos Φ 在 [-1, 1] 均匀，
//! 保证取向在 SO(3) 上按 Bunge 参数化均匀分布。
//!
//! ## 依赖关系
//! - 使用 `cli/orientations.rs` 定义的参数
//! - 使用 `parsers/` 读取、`csv` 写出
//! - 使用 `rand` 采样

use crate::cli::orientations::{GenerateArgs, InspectArgs, OrientationsArgs, OrientationsCommands};
use crate::error::{PolycpError, Result};
use crate::models::CrystalOrientation;
use crate::parsers;
use crate::utils::output;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 执行 orientations 命令
pub fn execute(args: OrientationsArgs) -> Result<()> {
    match args.command {
        OrientationsCommands::Inspect(args) => execute_inspect(args),
        OrientationsCommands::Generate(args) => execute_generate(args),
    }
}

/// 检查取向文件
fn execute_inspect(args: InspectArgs) -> Result<()> {
    output::print_header("Grain Orientation File");

    if !args.input.is_file() {
        return Err(PolycpError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let orientations = parsers::load_orientations(&args.input)?;
    output::print_info(&format!(
        "'{}' contains {} grain orientations",
        args.input.display(),
        orientations.len()
    ));

    if orientations.is_empty() {
        output::print_warning("File contains no orientation records");
        return Ok(());
    }

    print_orientation_table(&orientations, args.head);
    Ok(())
}

/// 生成随机取向文件
fn execute_generate(args: GenerateArgs) -> Result<()> {
    output::print_header("Random Grain Orientations");

    if args.count == 0 {
        return Err(PolycpError::InvalidArgument(
            "Grain count must be at least 1".to_string(),
        ));
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let orientations: Vec<CrystalOrientation> = (0..args.count)
        .map(|_| sample_orientation(&mut rng))
        .collect();

    write_orientations(&orientations, &args.output)?;

    output::print_success(&format!(
        "Wrote {} orientations to '{}'",
        orientations.len(),
        args.output.display()
    ));
    Ok(())
}

/// 在 SO(3) 上均匀采样一个 Bunge 取向
fn sample_orientation<R: Rng>(rng: &mut R) -> CrystalOrientation {
    let phi1 = rng.gen::<f64>() * 360.0;
    let phi = (rng.gen::<f64>() * 2.0 - 1.0).acos().to_degrees();
    let phi2 = rng.gen::<f64>() * 360.0;
    CrystalOrientation::new(phi1, phi, phi2)
}

/// 写出取向列表（无表头，加载器可直接读取）
fn write_orientations(
    orientations: &[CrystalOrientation],
    path: &std::path::Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for orientation in orientations {
        wtr.write_record(&[
            format!("{:.6}", orientation.phi1),
            format!("{:.6}", orientation.phi),
            format!("{:.6}", orientation.phi2),
        ])?;
    }

    wtr.flush().map_err(|e| PolycpError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 打印前若干条取向记录
fn print_orientation_table(orientations: &[CrystalOrientation], count: usize) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct OrientationRow {
        #[tabled(rename = "Grain")]
        index: usize,
        #[tabled(rename = "phi1 (°)")]
        phi1: String,
        #[tabled(rename = "Phi (°)")]
        phi: String,
        #[tabled(rename = "phi2 (°)")]
        phi2: String,
    }

    let rows: Vec<OrientationRow> = orientations
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, o)| OrientationRow {
            index: i + 1,
            phi1: format!("{:.3}", o.phi1),
            phi: format!("{:.3}", o.phi),
            phi2: format!("{:.3}", o.phi2),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
        if orientations.len() > count {
            output::print_info(&format!("... and {} more", orientations.len() - count));
        }
    }
}
