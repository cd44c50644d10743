//! # simulate 子命令 CLI 定义
//!
//! 单轴拉伸模拟的全部输入参数。原脚本中的硬编码常量
//! 在此全部提升为带默认值的命令行参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/simulate.rs`

use clap::Args;
use std::path::PathBuf;

use crate::error::{PolycpError, Result};

/// simulate 子命令参数
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Grain orientation file (one 'phi1,Phi,phi2' line per grain, degrees, Bunge)
    #[arg(long, default_value = "input_orientations.csv")]
    pub orientations: PathBuf,

    /// Output image file (.png or .svg)
    #[arg(long, default_value = "creep.png")]
    pub output: PathBuf,

    /// Optional CSV export of the strain/stress curve
    #[arg(long)]
    pub data_out: Option<PathBuf>,

    // ─────────────────────────────────────────────────────────────
    // 弹性与加载参数
    // ─────────────────────────────────────────────────────────────
    /// Young's modulus (MPa)
    #[arg(long, default_value_t = 211000.0)]
    pub youngs: f64,

    /// Poisson's ratio
    #[arg(long, default_value_t = 0.3)]
    pub poissons: f64,

    /// Applied strain rate (1/s)
    #[arg(long, default_value_t = 1.0e-4)]
    pub erate: f64,

    /// Maximum axial strain
    #[arg(long, default_value_t = 0.005)]
    pub emax: f64,

    /// Number of strain steps
    #[arg(long, default_value_t = 100)]
    pub nsteps: usize,

    /// Test temperature (K)
    #[arg(long, default_value_t = 300.0)]
    pub temperature: f64,

    // ─────────────────────────────────────────────────────────────
    // Voce 滑移硬化参数
    // ─────────────────────────────────────────────────────────────
    /// Voce saturation strength tau_sat (MPa)
    #[arg(long, default_value_t = 83.68041279)]
    pub tau_sat: f64,

    /// Voce hardening exponent b
    #[arg(long, default_value_t = 3.73928443)]
    pub voce_b: f64,

    /// Initial slip resistance tau_0 (MPa)
    #[arg(long, default_value_t = 3.05569439)]
    pub tau_0: f64,

    // ─────────────────────────────────────────────────────────────
    // 幂律滑移率参数
    // ─────────────────────────────────────────────────────────────
    /// Reference slip rate gamma_0 (1/s)
    #[arg(long, default_value_t = 0.26831762)]
    pub gamma_0: f64,

    /// Rate sensitivity exponent n
    #[arg(long, default_value_t = 14.04134645)]
    pub rate_n: f64,

    // ─────────────────────────────────────────────────────────────
    // 晶格与滑移系
    // ─────────────────────────────────────────────────────────────
    /// Cubic lattice parameter
    #[arg(long, default_value_t = 1.0)]
    pub lattice_a: f64,

    /// Slip direction Miller indices, e.g. '1,1,0'
    #[arg(long, default_value = "1,1,0")]
    pub slip_direction: String,

    /// Slip plane Miller indices, e.g. '1,1,1'
    #[arg(long, default_value = "1,1,1")]
    pub slip_plane: String,

    // ─────────────────────────────────────────────────────────────
    // 求解器控制
    // ─────────────────────────────────────────────────────────────
    /// Worker threads for grain evaluation (0 = all cores)
    #[arg(long, default_value_t = 8)]
    pub threads: usize,

    /// Maximum Newton iterations per grain step
    #[arg(long, default_value_t = 16)]
    pub max_iter: usize,

    /// Maximum adaptive step bisection levels
    #[arg(long, default_value_t = 4)]
    pub max_divide: usize,

    // ─────────────────────────────────────────────────────────────
    // 输出控制
    // ─────────────────────────────────────────────────────────────
    /// Plot width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Print per-step driver diagnostics instead of a progress bar
    #[arg(long)]
    pub verbose: bool,
}

/// 解析 'h,k,l' 形式的 Miller 指数
pub fn parse_miller(text: &str) -> Result<[i32; 3]> {
    let parts: Vec<&str> = text.split(',').map(|s| s.trim()).collect();
    if parts.len() != 3 {
        return Err(PolycpError::InvalidArgument(format!(
            "Miller indices must have 3 components: '{}'",
            text
        )));
    }

    let mut hkl = [0i32; 3];
    for (i, part) in parts.iter().enumerate() {
        hkl[i] = part.parse().map_err(|_| {
            PolycpError::InvalidArgument(format!("Invalid Miller index '{}' in '{}'", part, text))
        })?;
    }

    if hkl == [0, 0, 0] {
        return Err(PolycpError::InvalidArgument(format!(
            "Miller indices must be nonzero: '{}'",
            text
        )));
    }

    Ok(hkl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_miller() {
        assert_eq!(parse_miller("1,1,0").unwrap(), [1, 1, 0]);
        assert_eq!(parse_miller(" 1, -1, 2 ").unwrap(), [1, -1, 2]);
        assert!(parse_miller("1,1").is_err());
        assert!(parse_miller("1,1,x").is_err());
        assert!(parse_miller("0,0,0").is_err());
    }
}
