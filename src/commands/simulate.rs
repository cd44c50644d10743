//! # simulate 子命令实现
//!
//! 完整模拟流程：
//! 1. 读取晶粒取向文件
//! 2. 按依赖顺序组装本构模型链
//! 3. 运行单轴拉伸驱动
//! 4. 可选导出曲线数据，渲染散点图
//!
//! ## 依赖关系
//! - 使用 `cli/simulate.rs` 定义的 SimulateArgs
//! - 使用 `parsers/` 读取取向
//! - 使用 `cp/` 组装模型链
//! - 使用 `drivers/` 运行试验、导出与绘图

use crate::cli::simulate::{parse_miller, SimulateArgs};
use crate::cp::{
    AsaroInelasticity, CubicLattice, IsotropicLinearElastic, PowerLawSlipRule,
    SingleCrystalModel, StandardKinematicModel, TaylorModel, VoceSlipHardening,
};
use crate::drivers::{self, DriverResult};
use crate::error::{PolycpError, Result};
use crate::parsers;
use crate::utils::output;

/// 执行模拟
pub fn execute(args: SimulateArgs) -> Result<()> {
    output::print_header("Polycrystal Uniaxial Tensile Test");

    if !args.orientations.is_file() {
        return Err(PolycpError::FileNotFound {
            path: args.orientations.display().to_string(),
        });
    }

    // 读取晶粒取向
    let orientations = parsers::load_orientations(&args.orientations)?;
    output::print_info(&format!(
        "Loaded {} grain orientations from '{}'",
        orientations.len(),
        args.orientations.display()
    ));

    print_parameter_table(&args);

    // 组装本构模型链（严格依赖顺序）
    let elastic = IsotropicLinearElastic::from_youngs_poissons(args.youngs, args.poissons)?;

    let mut lattice = CubicLattice::new(args.lattice_a)?;
    lattice.add_slip_system(
        parse_miller(&args.slip_direction)?,
        parse_miller(&args.slip_plane)?,
    )?;
    output::print_info(&format!(
        "Registered {} slip systems from <{}>{{{}}}",
        lattice.slip_systems().len(),
        args.slip_direction,
        args.slip_plane
    ));

    let hardening = VoceSlipHardening::new(args.tau_sat, args.voce_b, args.tau_0)?;
    let slip_rule = PowerLawSlipRule::new(hardening, args.gamma_0, args.rate_n)?;
    let inelasticity = AsaroInelasticity::new(slip_rule);
    let kinematics = StandardKinematicModel::new(elastic, inelasticity);
    let single_crystal =
        SingleCrystalModel::new(kinematics, lattice, args.max_iter, args.max_divide)?;
    let polycrystal = TaylorModel::new(single_crystal, &orientations, args.threads)?;

    // 运行驱动
    output::print_info(&format!(
        "Running tensile test: {} steps to strain {:.4e} at rate {:.4e} 1/s",
        args.nsteps, args.emax, args.erate
    ));
    let result = drivers::uniaxial_test(
        &polycrystal,
        args.erate,
        args.temperature,
        args.emax,
        args.nsteps,
        args.verbose,
    )?;

    print_result_summary(&result);

    // 导出曲线数据
    if let Some(data_out) = &args.data_out {
        drivers::export::to_csv(&result, data_out)?;
        output::print_success(&format!("Curve data written to '{}'", data_out.display()));
    }

    // 绘制曲线
    drivers::plot::generate_curve_plot(
        &result,
        &args.output,
        "Polycrystal Tensile Response",
        args.width,
        args.height,
    )?;
    output::print_success(&format!("Plot written to '{}'", args.output.display()));

    Ok(())
}

/// 打印输入参数表格
fn print_parameter_table(args: &SimulateArgs) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ParamRow {
        #[tabled(rename = "Parameter")]
        name: &'static str,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = vec![
        ParamRow {
            name: "Young's modulus (MPa)",
            value: format!("{}", args.youngs),
        },
        ParamRow {
            name: "Poisson's ratio",
            value: format!("{}", args.poissons),
        },
        ParamRow {
            name: "Strain rate (1/s)",
            value: format!("{:e}", args.erate),
        },
        ParamRow {
            name: "Maximum strain",
            value: format!("{}", args.emax),
        },
        ParamRow {
            name: "Steps",
            value: format!("{}", args.nsteps),
        },
        ParamRow {
            name: "Temperature (K)",
            value: format!("{}", args.temperature),
        },
        ParamRow {
            name: "Voce tau_sat / b / tau_0",
            value: format!("{} / {} / {}", args.tau_sat, args.voce_b, args.tau_0),
        },
        ParamRow {
            name: "Power law gamma_0 / n",
            value: format!("{} / {}", args.gamma_0, args.rate_n),
        },
        ParamRow {
            name: "Slip family",
            value: format!("<{}>{{{}}}", args.slip_direction, args.slip_plane),
        },
        ParamRow {
            name: "Threads",
            value: format!("{}", args.threads),
        },
        ParamRow {
            name: "Max iterations / divisions",
            value: format!("{} / {}", args.max_iter, args.max_divide),
        },
    ];

    println!("{}", Table::new(&rows));
}

/// 打印结果摘要
fn print_result_summary(result: &DriverResult) {
    output::print_separator();
    let final_strain = result.strain.last().copied().unwrap_or(0.0);
    let final_stress = result.stress.last().copied().unwrap_or(0.0);
    output::print_info(&format!(
        "Computed {} points, final strain {:.4e}, final stress {:.3} MPa",
        result.len(),
        final_strain,
        final_stress
    ));
}
